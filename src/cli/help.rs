/// Map the `-v` count onto an `EnvFilter` directive.
///
/// Without `-v` the configured level wins, falling back to warnings only so
/// the notice printed for the outcome stays readable.
pub fn get_log_level(verbose: u8, configured: Option<&str>) -> String {
    match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "debug".to_string(),
        2 => "trace".to_string(),
        _ => "trace,hyper=debug,reqwest=trace".to_string(),
    }
}
