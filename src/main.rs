use std::path::PathBuf;

use anyhow::{bail, Context};
use wcwidth_bakery::{UcdInput, WidthTables};

const USAGE: &str = "\
usage: wcwidth_bakery <DerivedGeneralCategory.txt> <EastAsianWidth.txt> <output>

output ending in .rs is written as a Rust module, anything else as a C header
";

fn main() -> anyhow::Result<()>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        eprint!("{}", USAGE);
        return Ok(());
    }

    let general: PathBuf = args
        .free_from_os_str(path_arg)
        .context("missing path to DerivedGeneralCategory.txt")?;
    let east_asian: PathBuf = args
        .free_from_os_str(path_arg)
        .context("missing path to EastAsianWidth.txt")?;
    let output: PathBuf = args
        .free_from_os_str(path_arg)
        .context("missing output path")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        bail!("unrecognized arguments: {:?}\n\n{}", remaining, USAGE);
    }

    let tables = WidthTables::build(UcdInput::open(&general)?, UcdInput::open(&east_asian)?)?;

    wcwidth_bakery::output::write(&output, &tables)
        .with_context(|| format!("failed to write {}", output.display()))?;

    for stats in tables.stats() {
        println!("{}", stats);
    }

    Ok(())
}

fn path_arg(arg: &std::ffi::OsStr) -> Result<PathBuf, &'static str>
{
    Ok(arg.into())
}
