use argp::FromArgs;

/// Top-level command
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(description = "Content-aware gating for byte streams.")]
pub struct SniffGate {
    #[argp(option, short = 'v', global, default = "0")]
    #[argp(description = "Logging level (0 = Off, 1 = Error, 2 = Warn, 3 = Info, 4 = Debug, 5 = Trace)")]
    pub verbose: usize,

    #[argp(subcommand)]
    pub nested: Commands,
}

/// These are all the commands that Sniffgate supports via command line.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand)]
#[non_exhaustive]
pub enum Commands {
    Identify(IdentifyOption),
    Check(CheckOption),
    Copy(CopyOption),
}

/// Command to classify a file from its leading bytes.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "info")]
#[argp(description = "Identify a file's media type and print it")]
pub struct IdentifyOption {
    #[argp(positional)]
    #[argp(description = "Input file to be classified")]
    pub input: String,
}

/// Command to test a file's media type against an allow-list.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "check")]
#[argp(description = "Check a file's media type against an allow-list")]
pub struct CheckOption {
    #[argp(option, short = 'a')]
    #[argp(description = "Allowed media type pattern, e.g. image/png or image/* (repeatable)")]
    pub allow: Vec<String>,

    #[argp(positional)]
    #[argp(description = "Input file to be checked")]
    pub input: String,
}

/// Command to copy a file, gated on its media type.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "copy")]
#[argp(description = "Copy a file, rejecting disallowed media types")]
pub struct CopyOption {
    #[argp(option, short = 'a')]
    #[argp(description = "Allowed media type pattern, e.g. image/png or image/* (repeatable)")]
    pub allow: Vec<String>,

    #[argp(option, short = 'i')]
    #[argp(description = "Input file to be copied")]
    pub input: String,

    #[argp(option, short = 'o')]
    #[argp(description = "Output file to write to")]
    pub output: String,
}
