use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for dev builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "strz", bin_name = "strz", version = get_version())]
#[command(about = "String-manipulation toolkit for the command line", long_about = None)]
#[command(after_help = "Operands come from the command line; when stdin is piped, \
each input line is appended as one more operand.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the character length of each operand
    Length {
        /// Strings to operate on
        operands: Vec<String>,
    },

    /// Convert each operand to uppercase
    Upper { operands: Vec<String> },

    /// Convert each operand to lowercase
    Lower { operands: Vec<String> },

    /// Strip leading and trailing whitespace from each operand
    Trim { operands: Vec<String> },

    /// Quote each operand for safe reuse in a shell
    Escape { operands: Vec<String> },

    /// Undo shell quoting on each operand
    Unescape { operands: Vec<String> },

    /// Join the operands with a separator into a single line
    Join {
        /// Separator placed between operands
        separator: String,

        operands: Vec<String>,
    },

    /// Join the operands with NUL separators, trailing NUL included
    #[command(name = "join0")]
    Join0 { operands: Vec<String> },

    /// Split each operand on a separator, one field per line
    Split {
        /// Separator to split on (must not be empty)
        separator: String,

        operands: Vec<String>,
    },

    /// Split each operand on NUL bytes (one trailing NUL is ignored)
    #[command(name = "split0")]
    Split0 { operands: Vec<String> },

    /// Extract a 1-based inclusive character range from each operand
    Sub {
        /// First position; negative counts from the end
        #[arg(short = 's', default_value_t = 1, allow_negative_numbers = true, value_name = "START")]
        start: i64,

        /// Last position, inclusive; -1 is the last character
        #[arg(short = 'e', default_value_t = -1, allow_negative_numbers = true, value_name = "END")]
        end: i64,

        operands: Vec<String>,
    },

    /// Extract characters by 0-based offset and length from each operand
    #[command(name = "sub0")]
    Sub0 {
        /// Starting offset; negative counts from the end
        #[arg(short = 'o', default_value_t = 0, allow_negative_numbers = true, value_name = "OFFSET")]
        offset: i64,

        /// Number of characters to take (default: to the end)
        #[arg(short = 'l', allow_negative_numbers = true, value_name = "LENGTH")]
        length: Option<i64>,

        operands: Vec<String>,
    },

    /// Pad each operand to a shared width
    Pad {
        /// Pad on the right instead of the left
        #[arg(short = 'r')]
        right: bool,

        /// Fill string, repeated and truncated to fit
        #[arg(short = 'c', default_value = " ", allow_hyphen_values = true, value_name = "FILL")]
        fill: String,

        /// Target width; when omitted, the longest operand's length is used
        #[arg(short = 'w', default_value_t = 0, value_name = "WIDTH")]
        width: usize,

        operands: Vec<String>,
    },
}
