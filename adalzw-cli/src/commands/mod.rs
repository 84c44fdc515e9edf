//! Command implementations for the adalzw CLI.

pub mod compress;
pub mod expand;

pub use compress::cmd_compress;
pub use expand::cmd_expand;

use adalzw::{LzwStats, ResetPolicy};
use serde::Serialize;

/// Direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Compress,
    Expand,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::Compress => "compress",
            Self::Expand => "expand",
        }
    }
}

/// What a command did, for `--stats` and `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub operation: Operation,
    pub policy: &'static str,
    pub input_bytes: usize,
    pub output_bytes: usize,
    /// Uncompressed size over compressed size.
    pub ratio: f64,
    pub codewords: u64,
    pub promotions: u32,
    pub resets: u32,
    pub final_width: u8,
}

impl Summary {
    pub fn new(
        operation: Operation,
        policy: ResetPolicy,
        input_bytes: usize,
        output_bytes: usize,
        stats: LzwStats,
    ) -> Self {
        let (plain, packed) = match operation {
            Operation::Compress => (input_bytes, output_bytes),
            Operation::Expand => (output_bytes, input_bytes),
        };
        let ratio = if packed == 0 {
            0.0
        } else {
            plain as f64 / packed as f64
        };
        Self {
            operation,
            policy: policy.name(),
            input_bytes,
            output_bytes,
            ratio,
            codewords: stats.codewords,
            promotions: stats.promotions,
            resets: stats.resets,
            final_width: stats.final_width,
        }
    }

    /// Human-readable report, one field per line.
    pub fn render(&self) -> String {
        format!(
            "Operation: {}\n\
             Policy: {}\n\
             Input: {} bytes\n\
             Output: {} bytes\n\
             Ratio: {:.2}x\n\
             Codewords: {}\n\
             Width promotions: {}\n\
             Dictionary resets: {}\n\
             Final width: {} bits",
            self.operation.name(),
            self.policy,
            self.input_bytes,
            self.output_bytes,
            self.ratio,
            self.codewords,
            self.promotions,
            self.resets,
            self.final_width,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> LzwStats {
        LzwStats {
            codewords: 10,
            promotions: 1,
            resets: 0,
            final_width: 10,
            next_code: 600,
        }
    }

    #[test]
    fn test_ratio_direction() {
        let compress = Summary::new(Operation::Compress, ResetPolicy::Frozen, 400, 100, stats());
        assert_eq!(compress.ratio, 4.0);
        assert!(compress.render().starts_with("Operation: compress"));

        let expand = Summary::new(Operation::Expand, ResetPolicy::Frozen, 100, 400, stats());
        assert_eq!(expand.ratio, 4.0);
        let json = serde_json::to_value(&expand).unwrap();
        assert_eq!(json["operation"], "expand");
    }

    #[test]
    fn test_json_fields() {
        let summary = Summary::new(Operation::Compress, ResetPolicy::Monitored, 8, 4, stats());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["operation"], "compress");
        assert_eq!(json["policy"], "monitored");
        assert_eq!(json["ratio"], 2.0);
        assert_eq!(json["final_width"], 10);
    }

    #[test]
    fn test_render() {
        let summary = Summary::new(Operation::Compress, ResetPolicy::Saturate, 8, 4, stats());
        let text = summary.render();
        assert!(text.contains("Policy: saturate"));
        assert!(text.contains("Ratio: 2.00x"));
    }
}
