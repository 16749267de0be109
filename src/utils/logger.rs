use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// 日誌一律寫到 stderr，stdout 保留給 dry-run 的 JSON 與最後的摘要
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "vite_kickstart=debug,info"
    } else {
        "vite_kickstart=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 每個事件一行 JSON，欄位攤平在最上層，方便 CI 用 jq 過濾。
/// verbose 時附上 target 與行號，定位是哪個階段寫出的。
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_file(verbose)
                .with_line_number(verbose),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_scopes_debug_to_crate() {
        assert_eq!(default_directive(false), "vite_kickstart=info");
        assert_eq!(default_directive(true), "vite_kickstart=debug,info");
    }
}
