use std::{fs, process};

use clap::Parser;
use schedcop_cli::{report, AnalyzeArgs, App, Command, GenerateArgs};
use schedcop_core::Analysis;
use schedcop_parser::{format_pair, parse_pair, TransactionPair};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = App::parse();
    match &app.command {
        Command::Analyze(args) => analyze(args),
        Command::Generate(args) => generate(args),
        Command::Schema => schema(),
    }
}

fn load_pair(args: &AnalyzeArgs) -> TransactionPair {
    if let Some(pair) = args.inline_pair() {
        return pair;
    }
    let Some(path) = &args.input else {
        return schedcop_cli::default_pair();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        process::exit(1);
    });
    parse_pair(&text).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        process::exit(1);
    })
}

fn analyze(args: &AnalyzeArgs) {
    let pair = load_pair(args);
    tracing::debug!(
        t1 = pair.first.len(),
        t2 = pair.second.len(),
        "loaded transaction pair"
    );

    let analysis: Analysis<String> = pair.analyze().unwrap_or_else(|e| {
        eprintln!("Invalid transaction: {e}");
        process::exit(1);
    });

    if args.json {
        let json = serde_json::to_string_pretty(&analysis).unwrap_or_else(|e| {
            eprintln!("Failed to serialize analysis: {e}");
            process::exit(1);
        });
        println!("{json}");
    } else {
        print!("{}", report::render(&analysis, args.verbose));
    }

    if args.fail_on_unserializable && !analysis.all_serializable() {
        process::exit(2);
    }
}

fn generate(args: &GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let pairs = schedcop_testgen::generator::generate_mult_pairs(
        args.n_pair,
        args.n_object,
        args.n_operation,
    );

    for generated in &pairs {
        let path = args.output_dir.join(format!("{}.txn", generated.get_id()));
        fs::write(&path, format_pair(generated.get_pair())).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} pairs to {}",
        pairs.len(),
        args.output_dir.display()
    );
}

fn schema() {
    let schema = schemars::schema_for!(Analysis<String>);
    let json = serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        process::exit(1);
    });
    println!("{json}");
}
