use anyhow::Result;

use super::Context;
use crate::cli::Output;
use crate::config::Config;

pub fn path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

pub fn show(ctx: &Context) -> Result<()> {
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}

pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config_toml = toml::to_string_pretty(&ctx.config)?;
    let value = toml::from_str::<toml::Value>(&config_toml)?;

    // Parse nested key (e.g., "storage.kind")
    let mut current = &value;
    for k in key.split('.') {
        match current.get(k) {
            Some(v) => current = v,
            None => {
                return Err(anyhow::anyhow!("Key '{}' not found in config", key));
            }
        }
    }

    match current {
        toml::Value::String(s) => println!("{}", s),
        toml::Value::Integer(i) => println!("{}", i),
        toml::Value::Float(f) => println!("{}", f),
        toml::Value::Boolean(b) => println!("{}", b),
        toml::Value::Array(arr) => {
            println!("[");
            for item in arr {
                println!("  {},", toml::to_string(item)?.trim());
            }
            println!("]");
        }
        toml::Value::Table(_) => {
            print!("{}", toml::to_string_pretty(current)?);
        }
        _ => println!("{:?}", current),
    }

    Ok(())
}

fn parse_value(value: &str) -> Result<toml::Value> {
    Ok(if value == "true" {
        toml::Value::Boolean(true)
    } else if value == "false" {
        toml::Value::Boolean(false)
    } else if let Ok(i) = value.parse::<i64>() {
        toml::Value::Integer(i)
    } else if value.starts_with('[') && value.ends_with(']') {
        // Array value - parse as a TOML inline value
        let mut table: toml::Table = toml::from_str(&format!("v = {}", value))
            .map_err(|e| anyhow::anyhow!("Failed to parse array: {}", e))?;
        table
            .remove("v")
            .ok_or_else(|| anyhow::anyhow!("Failed to parse array"))?
    } else {
        toml::Value::String(value.to_string())
    })
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let config = Config::load_or_default()?;
    let config_toml = toml::to_string_pretty(&config)?;
    let mut toml_value = toml::from_str::<toml::Value>(&config_toml)?;

    let keys: Vec<&str> = key.split('.').collect();
    let Some((last_key, parents)) = keys.split_last() else {
        return Err(anyhow::anyhow!("Empty config key"));
    };

    // Navigate to the parent of the target key, creating tables as needed
    let mut current = &mut toml_value;
    for k in parents {
        let table = current
            .as_table_mut()
            .ok_or_else(|| anyhow::anyhow!("Cannot set value at '{}'", key))?;
        current = table
            .entry(k.to_string())
            .or_insert(toml::Value::Table(toml::Table::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| anyhow::anyhow!("Cannot set value at '{}'", key))?;
    table.insert(last_key.to_string(), parse_value(value)?);

    // Round-trip through Config so invalid values are rejected before saving
    let config_toml = toml::to_string_pretty(&toml_value)?;
    let config: Config = toml::from_str(&config_toml)
        .map_err(|e| anyhow::anyhow!("Invalid value for '{}': {}", key, e))?;
    config.managers.resolve()?;
    config.save()?;

    Output::success(&format!("Set {} = {}", key, value));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("true").unwrap(), toml::Value::Boolean(true));
        assert_eq!(
            parse_value("local").unwrap(),
            toml::Value::String("local".to_string())
        );
        assert_eq!(
            parse_value(r#"["pnpm", "npm"]"#).unwrap(),
            toml::Value::Array(vec![
                toml::Value::String("pnpm".to_string()),
                toml::Value::String("npm".to_string()),
            ])
        );
    }
}
