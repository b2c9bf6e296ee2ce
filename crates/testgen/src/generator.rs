use rand::distr::{Distribution, Uniform};
use rand::RngExt;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use schedcop_core::Access;
use schedcop_parser::TransactionPair;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

const OBJECT_NAMES: [&str; 8] = ["X", "Y", "Z", "A", "B", "C", "D", "E"];

#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct PairParams {
    pub id: u64,
    pub n_object: u64,
    pub n_operation: u64,
    /// Sprinkle assignment statements (`X:= X + 1`) after reads.
    #[builder(default = true)]
    pub with_assignments: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GeneratedPair {
    params: PairParams,
    pair: TransactionPair,
}

impl GeneratedPair {
    #[must_use]
    pub const fn new(params: PairParams, pair: TransactionPair) -> Self {
        Self { params, pair }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_pair(&self) -> &TransactionPair {
        &self.pair
    }

    #[must_use]
    pub const fn get_params(&self) -> &PairParams {
        &self.params
    }
}

/// Name of the `index`-th object: `X`, `Y`, `Z`, `A`, ... then `X8`, `X9`, ...
#[must_use]
pub fn object_name(index: u64) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| OBJECT_NAMES.get(i))
        .map_or_else(|| format!("X{index}"), ToString::to_string)
}

/// Generate the statements of one transaction: `n_operation` reads or
/// writes over `n_object` objects, each access chosen uniformly at random.
///
/// With `with_assignments`, some reads are followed by an assignment
/// statement, which the analysis drops.
///
/// Returns no statements when `n_object` is zero.
#[must_use]
pub fn generate_transaction(n_object: u64, n_operation: u64, with_assignments: bool) -> Vec<String> {
    let Ok(object_range) = Uniform::new(0, n_object) else {
        return Vec::new();
    };
    let mut random_generator = rand::rng();
    let mut statements = Vec::new();

    for _ in 0..n_operation {
        let object = object_name(object_range.sample(&mut random_generator));
        let access = if random_generator.random::<bool>() {
            Access::Read
        } else {
            Access::Write
        };
        statements.push(format!("{}({object})", access.marker()));
        if with_assignments && access == Access::Read && random_generator.random::<bool>() {
            statements.push(format!("{object}:= {object} + 1"));
        }
    }

    statements
}

/// Generate one transaction pair, both transactions with the same shape.
#[must_use]
pub fn generate_pair(params: PairParams) -> GeneratedPair {
    let first = generate_transaction(params.n_object, params.n_operation, params.with_assignments);
    let second = generate_transaction(params.n_object, params.n_operation, params.with_assignments);
    GeneratedPair::new(params, TransactionPair::new(first, second))
}

#[must_use]
pub fn generate_mult_pairs(n_pair: u64, n_object: u64, n_operation: u64) -> Vec<GeneratedPair> {
    (0..n_pair)
        .into_par_iter()
        .map(|id| {
            generate_pair(
                PairParams::builder()
                    .id(id)
                    .n_object(n_object)
                    .n_operation(n_operation)
                    .build(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_names() {
        assert_eq!(object_name(0), "X");
        assert_eq!(object_name(3), "A");
        assert_eq!(object_name(8), "X8");
    }

    #[test]
    fn test_transaction_shape() {
        let statements = generate_transaction(3, 10, false);
        assert_eq!(statements.len(), 10);
        assert!(statements
            .iter()
            .all(|s| s.starts_with("read_item(") || s.starts_with("write_item(")));
    }

    #[test]
    fn test_assignments_follow_reads() {
        let statements = generate_transaction(2, 50, true);
        for (i, statement) in statements.iter().enumerate() {
            if statement.contains(":=") {
                assert!(statements[i - 1].starts_with("read_item("));
            }
        }
    }

    #[test]
    fn test_zero_objects() {
        assert!(generate_transaction(0, 5, true).is_empty());
    }

    #[test]
    fn test_mult_pairs_ids() {
        let pairs = generate_mult_pairs(4, 2, 3);
        let mut ids: Vec<u64> = pairs.iter().map(GeneratedPair::get_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(pairs.iter().all(|p| p.get_params().with_assignments));
    }
}
