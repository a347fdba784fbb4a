use flow_filter::cli_parse;
use flow_filter::logging::{get_log_level, init_logger};

fn main() -> anyhow::Result<()> {
    let cli = cli_parse();
    init_logger(get_log_level(&cli.log_level));
    flow_filter::run(cli)
}
