//! Contract call handle for the NFT collection.
//!
//! [`NftContract`] binds a [`ContractRef`] to a wallet provider and,
//! for state-changing calls, to a signer account.

use alloy_primitives::{Address, U256};

use crate::abi::ContractRef;
use crate::error::{AbiError, ContractError, ContractResult, WalletError};
use crate::types::{CallRequest, TransactionReceipt, TransactionRequest, TxHash};
use crate::wallet::{AccountQuery, ReadOnlyQuery, TransactionSubmission};

/// Function names in the collection ABI.
pub const MINT_FUNCTION: &str = "mintNFTs";
pub const TOTAL_MINTED_FUNCTION: &str = "getTotalMinted";

/// Per-transaction overrides (gas ceiling, payment).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxOverrides {
    pub gas_limit: u64,
    pub value: U256,
}

/// Contract handle, optionally bound to a signer.
pub struct NftContract<'a, P> {
    contract: &'a ContractRef,
    provider: &'a P,
    signer: Option<Address>,
}

impl<'a, P> NftContract<'a, P> {
    /// Read-only handle.
    pub fn new(contract: &'a ContractRef, provider: &'a P) -> Self {
        Self {
            contract,
            provider,
            signer: None,
        }
    }

    /// Handle bound to an explicit signer.
    pub fn with_signer(contract: &'a ContractRef, provider: &'a P, signer: Address) -> Self {
        Self {
            contract,
            provider,
            signer: Some(signer),
        }
    }

    pub fn signer(&self) -> Option<Address> {
        self.signer
    }
}

impl<'a, P: AccountQuery> NftContract<'a, P> {
    /// Bind to the wallet's current signer (first authorized account).
    pub async fn connect_signer(contract: &'a ContractRef, provider: &'a P) -> ContractResult<Self> {
        let signer = provider
            .accounts()
            .await?
            .into_iter()
            .next()
            .ok_or(WalletError::NoAccounts)?;
        Ok(Self::with_signer(contract, provider, signer))
    }
}

impl<'a, P: TransactionSubmission> NftContract<'a, P> {
    /// Submit `mintNFTs(count)`. Returns once the wallet has broadcast it.
    pub async fn mint_nfts(
        &self,
        count: u64,
        overrides: TxOverrides,
    ) -> ContractResult<PendingTransaction<'a, P>> {
        let from = self.signer.ok_or(ContractError::NoSigner)?;
        let data = self
            .contract
            .abi
            .function(MINT_FUNCTION)?
            .encode_call(&[U256::from(count)])?;

        let tx = TransactionRequest {
            from,
            to: self.contract.address,
            data,
            gas: overrides.gas_limit,
            value: overrides.value,
        };
        let hash = self.provider.send_transaction(tx).await?;
        Ok(PendingTransaction {
            provider: self.provider,
            hash,
        })
    }
}

impl<'a, P: ReadOnlyQuery> NftContract<'a, P> {
    /// `getTotalMinted()`.
    pub async fn total_minted(&self) -> ContractResult<u64> {
        let function = self.contract.abi.function(TOTAL_MINTED_FUNCTION)?;
        let request = CallRequest {
            to: self.contract.address,
            data: function.encode_call(&[])?,
        };
        let raw = self.provider.call(request).await?;
        let total = function.decode_uint(&raw)?;
        u64::try_from(total).map_err(|_| AbiError::Overflow(total.to_string()).into())
    }
}

/// A broadcast transaction awaiting confirmation.
pub struct PendingTransaction<'a, P> {
    provider: &'a P,
    hash: TxHash,
}

impl<'a, P: TransactionSubmission> PendingTransaction<'a, P> {
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// Wait for the receipt; a reverted receipt is an error.
    pub async fn wait(self) -> ContractResult<TransactionReceipt> {
        let receipt = self.provider.wait_for_receipt(self.hash).await?;
        if !receipt.succeeded() {
            return Err(ContractError::Reverted {
                tx_hash: self.hash.to_string(),
            });
        }
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MintConfig;
    use crate::testing::{account, FakeWallet};

    fn overrides() -> TxOverrides {
        TxOverrides {
            gas_limit: 160_000,
            value: U256::from(10_000_000_000_000_000u64),
        }
    }

    #[tokio::test]
    async fn test_mint_builds_transaction() {
        let config = MintConfig::default();
        let contract = config.contract().unwrap();
        let wallet = FakeWallet::polygon(vec![account(0xaa)]);

        let handle = NftContract::connect_signer(&contract, &wallet).await.unwrap();
        assert_eq!(handle.signer(), Some(account(0xaa)));

        let pending = handle.mint_nfts(1, overrides()).await.unwrap();
        let receipt = pending.wait().await.unwrap();
        assert!(receipt.succeeded());

        let sent = wallet.sent_transactions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, account(0xaa));
        assert_eq!(sent[0].to, config.contract_address);
        assert_eq!(sent[0].gas, 160_000);
        assert_eq!(&sent[0].data[..4], &[0x3b, 0x4b, 0x13, 0x81]);
    }

    #[tokio::test]
    async fn test_read_only_handle_cannot_mint() {
        let contract = MintConfig::default().contract().unwrap();
        let wallet = FakeWallet::polygon(vec![account(0xaa)]);

        let handle = NftContract::new(&contract, &wallet);
        assert!(matches!(
            handle.mint_nfts(1, overrides()).await,
            Err(ContractError::NoSigner)
        ));
        assert!(wallet.sent_transactions().is_empty());
    }

    #[tokio::test]
    async fn test_connect_signer_without_accounts() {
        let contract = MintConfig::default().contract().unwrap();
        let wallet = FakeWallet::polygon(vec![]);

        assert!(matches!(
            NftContract::connect_signer(&contract, &wallet).await,
            Err(ContractError::Wallet(WalletError::NoAccounts))
        ));
    }

    #[tokio::test]
    async fn test_reverted_receipt() {
        let contract = MintConfig::default().contract().unwrap();
        let wallet = FakeWallet::polygon(vec![account(0xaa)]).reverting();

        let handle = NftContract::connect_signer(&contract, &wallet).await.unwrap();
        let pending = handle.mint_nfts(1, overrides()).await.unwrap();
        assert!(matches!(
            pending.wait().await,
            Err(ContractError::Reverted { .. })
        ));
    }

    #[tokio::test]
    async fn test_total_minted() {
        let contract = MintConfig::default().contract().unwrap();
        let wallet = FakeWallet::polygon(vec![]).with_minted(U256::from(5));

        let handle = NftContract::new(&contract, &wallet);
        assert_eq!(handle.total_minted().await.unwrap(), 5);

        let calls = wallet.read_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].data, vec![0x0c, 0xa1, 0xc5, 0xc9]);
    }

    #[tokio::test]
    async fn test_total_minted_overflow() {
        let contract = MintConfig::default().contract().unwrap();
        let wallet = FakeWallet::polygon(vec![]).with_minted(U256::MAX);

        let handle = NftContract::new(&contract, &wallet);
        assert!(matches!(
            handle.total_minted().await,
            Err(ContractError::Abi(AbiError::Overflow(_)))
        ));
    }
}
