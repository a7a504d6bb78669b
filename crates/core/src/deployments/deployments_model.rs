//! Asset deployment domain models.

use serde::{Deserialize, Serialize};

/// Placeholder address used by source data for native-token deployments.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Value the registry expects as the contract address of a native token.
pub const NATIVE_ADDRESS_SENTINEL: &str = "native";

/// A contract deployment as read from the record source.
///
/// `asset_symbol` is resolved against the registry's asset listing at
/// submission time, not against the candidates of the current batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentCandidate {
    pub asset_symbol: String,
    pub chain_id: String,
    pub contract_address: String,
    pub decimals: u32,
    pub is_native: bool,
}

/// Payload for the registry's `CreateAssetDeployment` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeploymentRequest {
    pub asset_id: String,
    pub chain_id: String,
    pub contract_address: String,
    pub decimals: u32,
    pub is_native: bool,
}

/// Substitute the native sentinel for the zero placeholder address.
///
/// Only applies when `is_native` is set; every other address is returned
/// unchanged.
pub fn normalize_contract_address(contract_address: &str, is_native: bool) -> String {
    if is_native && contract_address == ZERO_ADDRESS {
        NATIVE_ADDRESS_SENTINEL.to_string()
    } else {
        contract_address.to_string()
    }
}

impl DeploymentCandidate {
    /// Natural key of this candidate, `SYMBOL@chain`.
    pub fn key(&self) -> String {
        format!("{}@{}", self.asset_symbol, self.chain_id)
    }

    /// Build the registry request once the asset identifier is known.
    pub fn to_request(&self, asset_id: &str) -> CreateDeploymentRequest {
        CreateDeploymentRequest {
            asset_id: asset_id.to_string(),
            chain_id: self.chain_id.clone(),
            contract_address: normalize_contract_address(&self.contract_address, self.is_native),
            decimals: self.decimals,
            is_native: self.is_native,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment(address: &str, is_native: bool) -> DeploymentCandidate {
        DeploymentCandidate {
            asset_symbol: "ETH".to_string(),
            chain_id: "ethereum".to_string(),
            contract_address: address.to_string(),
            decimals: 18,
            is_native,
        }
    }

    #[test]
    fn test_native_zero_address_becomes_sentinel() {
        let request = deployment(ZERO_ADDRESS, true).to_request("asset-eth");
        assert_eq!(request.contract_address, "native");
        assert_eq!(request.asset_id, "asset-eth");
        assert_eq!(request.chain_id, "ethereum");
        assert!(request.is_native);
    }

    #[test]
    fn test_zero_address_kept_for_non_native() {
        let request = deployment(ZERO_ADDRESS, false).to_request("asset-eth");
        assert_eq!(request.contract_address, ZERO_ADDRESS);
    }

    #[test]
    fn test_other_addresses_pass_through() {
        let usdc = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
        assert_eq!(normalize_contract_address(usdc, true), usdc);
        assert_eq!(normalize_contract_address(usdc, false), usdc);
        assert_eq!(normalize_contract_address("", true), "");
    }

    #[test]
    fn test_key_combines_symbol_and_chain() {
        assert_eq!(deployment(ZERO_ADDRESS, true).key(), "ETH@ethereum");
    }

    #[test]
    fn test_parse_rejects_negative_decimals() {
        let json = r#"{
            "asset_symbol": "ETH",
            "chain_id": "ethereum",
            "contract_address": "0x0",
            "decimals": -1,
            "is_native": true
        }"#;
        assert!(serde_json::from_str::<DeploymentCandidate>(json).is_err());
    }
}
