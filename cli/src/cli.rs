use clap::Parser;

#[derive(Parser)]
#[command(name = "genexceptions")]
#[command(
    author,
    version,
    about = "Generate S3 exception classes from the HTML error code table on stdin"
)]
pub struct Cli {
    /// Prefix of the generated status-code classes
    #[clap(long, default_value = "S3Server")]
    pub status_prefix: String,

    /// Root class extended by status-code classes and by errors without a code
    #[clap(long, default_value = "S3ServerException")]
    pub base_class: String,

    /// Service name used in status-code class comments
    #[clap(long, default_value = "S3")]
    pub service_name: String,

    /// Enable verbose output on stderr with a generation summary
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}
