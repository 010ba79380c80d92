//--------------------------------------------------------------------
// logging.rs
//--------------------------------------------------------------------
// Installs the tracing subscriber
//--------------------------------------------------------------------

use tracing_subscriber::EnvFilter;

// Verbose runs always log at debug level; otherwise RUST_LOG decides, falling back to info
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
