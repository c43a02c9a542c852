pub mod menu;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "kctx",
    version,
    about = "switch the active kubeconfig context from a menu",
    long_about = "Shows the active context of ~/.kube/config and switches it to any context listed in the file."
)]
pub struct Cli {}
