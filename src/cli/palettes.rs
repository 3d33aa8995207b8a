//! Palettes command implementation.
//!
//! Lists the builtin quantization palettes on stdout, as plain text
//! or JSON.

use clap::Args;
use serde_json::json;

use crate::error::Result;
use crate::types::BUILTIN_PALETTES;

/// List the builtin quantization palettes
#[derive(Args, Debug)]
pub struct PalettesArgs {
    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PalettesArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&palettes_json()).unwrap_or_default());
        return Ok(());
    }

    for palette in BUILTIN_PALETTES {
        println!("{} ({} colours)", palette.name, palette.len());
        for colour in palette.entries {
            println!("  {}", colour);
        }
    }

    Ok(())
}

/// The builtin palettes as a JSON value.
fn palettes_json() -> serde_json::Value {
    let palettes: Vec<serde_json::Value> = BUILTIN_PALETTES
        .iter()
        .map(|palette| {
            json!({
                "name": palette.name,
                "colours": palette
                    .entries
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<String>>(),
            })
        })
        .collect();

    json!({ "palettes": palettes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_json_shape() {
        let value = palettes_json();
        let palettes = value["palettes"].as_array().unwrap();
        assert_eq!(palettes.len(), 3);

        assert_eq!(palettes[0]["name"], "ega16");
        assert_eq!(palettes[0]["colours"].as_array().unwrap().len(), 16);

        assert_eq!(palettes[2]["name"], "mono");
        assert_eq!(
            palettes[2]["colours"],
            json!(["#000000", "#FFFFFF"])
        );
    }
}
