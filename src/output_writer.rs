//! Records deployed contract addresses in a JSON address book

use std::{fs, path::Path};

use json::JsonValue;

use crate::{deploy::spec::DeploymentRun, errors::ScriptError};

/// Writes every address of the run under its resource name, keeping entries
/// already present in the file
pub fn write_deployment_addresses(
    file_path: &Path,
    run: &DeploymentRun,
) -> Result<(), ScriptError> {
    // If the file doesn't exist yet, start from an empty book
    let mut parsed_json = if file_path.exists() {
        get_json_from_file(file_path)?
    } else {
        JsonValue::new_object()
    };

    // Update the right keys
    for resource in run.iter() {
        parsed_json[resource.spec.name.as_str()]["deploy"] =
            JsonValue::String(format!("{:#x}", resource.address));
    }

    // Write the updated json back to the file
    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::env;

    use alloy::primitives::address;

    use super::*;
    use crate::deploy::spec::{ArgValue, DeployedResource, ResourceSpec};

    #[test]
    fn records_addresses_and_keeps_existing_entries() {
        let file_path = env::temp_dir().join("crftd-scripts-output-writer-test.json");
        fs::write(&file_path, r#"{"marketplace":{"deploy":"0xstale"},"other":{"deploy":"0x1"}}"#)
            .unwrap();

        let mut run = DeploymentRun::default();
        run.push(DeployedResource {
            spec: ResourceSpec::new("marketplace", "Marketplace", vec![]),
            address: address!("fB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"),
        });
        run.push(DeployedResource {
            spec: ResourceSpec::new("marketRegistry", "CRFTDRegistry", vec![ArgValue::uint(100u64)]),
            address: address!("dbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"),
        });

        write_deployment_addresses(&file_path, &run).unwrap();

        let book = get_json_from_file(&file_path).unwrap();
        assert_eq!(
            book["marketplace"]["deploy"],
            "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359"
        );
        assert_eq!(
            book["marketRegistry"]["deploy"],
            "0xdbf03b407c01e7cd3cbea99509d93f8dddc8c6fb"
        );
        // Entries from earlier runs survive
        assert_eq!(book["other"]["deploy"], "0x1");

        fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn missing_file_is_created() {
        let file_path = env::temp_dir().join("crftd-scripts-output-writer-created.json");
        let _ = fs::remove_file(&file_path);

        let mut run = DeploymentRun::default();
        run.push(DeployedResource {
            spec: ResourceSpec::new("token", "MockERC20", vec![]),
            address: address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
        });

        write_deployment_addresses(&file_path, &run).unwrap();

        let book = get_json_from_file(&file_path).unwrap();
        assert_eq!(
            book["token"]["deploy"],
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        );

        fs::remove_file(&file_path).unwrap();
    }
}
