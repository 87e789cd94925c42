use schemagen_cli::SchemagenCli;

fn main() -> anyhow::Result<()> {
    SchemagenCli::new().parse_and_run()
}
