mod cli;
mod commands;
mod logging;

use cli::{AliasParams, BoundaryParams, LangsParams, TreeParams, build_cli};

fn main() {
    logging::init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("boundary", m)) => {
            let params = BoundaryParams::from_matches(m);
            commands::boundary::run(params.into());
        }
        Some(("alias", m)) => {
            let params = AliasParams::from_matches(m);
            commands::alias::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        Some(("langs", m)) => {
            let params = LangsParams::from_matches(m);
            commands::langs::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
