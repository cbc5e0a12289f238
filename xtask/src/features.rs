use std::process::Command;

use anyhow::{Context, Result};

/// `chroney-common` feature tiers that must build on their own.
const FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // default: no modules
    &["foundation"],
    &["test-utils"],
];

/// Check that every `chroney-common` feature tier compiles and its tests pass.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} chroney-common feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, features) in FEATURE_COMBINATIONS.iter().enumerate() {
        let joined = features.join(",");
        let is_default = features.is_empty();
        let display_label = if is_default { "default".to_string() } else { joined.clone() };
        let feature_arg = if is_default { None } else { Some(joined) };
        let subcommand = if is_default { "check" } else { "test" };

        println!(
            "\n[{}/{}] cargo {subcommand} -p chroney-common{}",
            index + 1,
            FEATURE_COMBINATIONS.len(),
            feature_arg.as_ref().map(|arg| format!(" --features {arg}")).unwrap_or_default()
        );

        let mut command = Command::new("cargo");
        command.arg(subcommand).arg("-p").arg("chroney-common");

        if let Some(feature_list) = feature_arg.as_ref() {
            command.arg("--features").arg(feature_list.as_str());
        }

        let status = command
            .status()
            .with_context(|| format!("Failed to run cargo {subcommand} for '{display_label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{display_label}' failed");
        }

        println!("✅ Features '{display_label}' passed");
    }

    println!("\n✅ All {} feature combinations pass!", FEATURE_COMBINATIONS.len());

    Ok(())
}
