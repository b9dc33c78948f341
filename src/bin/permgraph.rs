//! permgraph CLI
//!
//! Run with: cargo run --features cli --bin permgraph -- <command>
//!
//! Commands:
//!   catalog                           - List permissions grouped by resource
//!   deps <perm>                       - Direct dependencies
//!   dependents <perm>                 - Permissions that directly depend on <perm>
//!   resolve <perm>...                 - Transitive closure
//!   auto-added <perm>...              - What the closure adds to the selection
//!   can-remove <perm> --current ...   - Removal check against a granted set
//!   check                             - Validate the dependency table

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use permgraph::{
    auto_added_permissions, blocking_permissions, by_resource, can_remove_permission, dependents,
    direct_dependencies, graph, parse_permissions, resolve_closure, Permission,
};

#[derive(Parser)]
#[command(name = "permgraph", about = "Inspect the permission dependency graph")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List permissions grouped by resource
    Catalog,
    /// Direct dependencies of a permission
    Deps { permission: String },
    /// Permissions that directly depend on a permission
    Dependents { permission: String },
    /// Transitive closure of a selection
    Resolve {
        #[arg(required = true)]
        permissions: Vec<String>,
    },
    /// Permissions the closure adds to a selection
    AutoAdded {
        #[arg(required = true)]
        permissions: Vec<String>,
    },
    /// Check whether a permission can be revoked
    CanRemove {
        permission: String,
        /// Currently granted permissions
        #[arg(long, num_args = 1..)]
        current: Vec<String>,
    },
    /// Validate the dependency table
    Check,
}

#[derive(Serialize)]
struct ResourceGroup {
    resource: &'static str,
    permissions: Vec<Permission>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemovalReport {
    #[serde(flatten)]
    check: permgraph::RemovalCheck,
    blocking_permissions: Vec<Permission>,
}

fn parse_one(name: &str) -> Result<Permission> {
    name.parse::<Permission>().with_context(|| format!("invalid permission argument {name:?}"))
}

fn parse_many(names: &[String]) -> Result<Vec<Permission>> {
    parse_permissions(names).context("invalid permission list")
}

fn print_list(format: Format, list: &[Permission]) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(list)?),
        Format::Text => {
            for p in list {
                println!("{p}");
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Catalog => {
            let groups: Vec<ResourceGroup> = by_resource()
                .into_iter()
                .map(|(r, perms)| ResourceGroup {
                    resource: r.as_str(),
                    permissions: perms.to_vec(),
                })
                .collect();
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&groups)?),
                Format::Text => {
                    for g in &groups {
                        let names: Vec<&str> = g.permissions.iter().map(|p| p.action()).collect();
                        println!("{:<18} {}", g.resource, names.join(", "));
                    }
                }
            }
        }
        Command::Deps { permission } => {
            print_list(cli.format, direct_dependencies(parse_one(&permission)?))?;
        }
        Command::Dependents { permission } => {
            print_list(cli.format, &dependents(parse_one(&permission)?))?;
        }
        Command::Resolve { permissions } => {
            let closure: Vec<Permission> =
                resolve_closure(&parse_many(&permissions)?).into_iter().collect();
            print_list(cli.format, &closure)?;
        }
        Command::AutoAdded { permissions } => {
            print_list(cli.format, &auto_added_permissions(&parse_many(&permissions)?))?;
        }
        Command::CanRemove { permission, current } => {
            let target = parse_one(&permission)?;
            let current = parse_many(&current)?;
            let report = RemovalReport {
                check: can_remove_permission(target, &current),
                blocking_permissions: blocking_permissions(target, &current),
            };
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                Format::Text => {
                    println!("can remove: {}", report.check.can_remove);
                    for p in &report.check.dependent_permissions {
                        println!("  required directly by {p}");
                    }
                    for p in &report.blocking_permissions {
                        println!("  required by {p}");
                    }
                }
            }
        }
        Command::Check => {
            graph::validate().context("dependency table is invalid")?;
            info!(permissions = Permission::ALL.len(), "dependency table ok");
            println!("ok: {} permissions, acyclic", Permission::ALL.len());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}
