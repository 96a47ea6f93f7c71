//! The four user-facing actions.
//!
//! Each action takes the wallet provider as an `Option` (absent when no
//! wallet is injected) and returns the [`SessionUpdate`] to apply. None of
//! them returns an error: failures are logged and either produce no
//! update or, for [`mint`], the `Error` status. There are no retries; the
//! user can always click again.

use alloy_primitives::Address;

use crate::abi::ContractRef;
use crate::config::MintConfig;
use crate::contract::{NftContract, TxOverrides};
use crate::error::{ActionError, ActionResult, WalletError};
use crate::session::{MintStatus, SessionUpdate};
use crate::types::TxHash;
use crate::wallet::{AccountQuery, NetworkQuery, Notifier, ReadOnlyQuery, TransactionSubmission};

/// Shown when the connect button is clicked without a wallet.
pub const INSTALL_WALLET_ALERT: &str = "Please install MetaMask!";

// =============================================================================
// Connection checker
// =============================================================================

/// Look for an already-authorized account on the expected network.
///
/// Runs on page load and never prompts. Accounts are listed before the
/// network is checked.
pub async fn check_connection<W>(wallet: Option<&W>, config: &MintConfig) -> Option<SessionUpdate>
where
    W: AccountQuery + NetworkQuery,
{
    let Some(wallet) = wallet else {
        log::info!("Make sure you have MetaMask installed!");
        return None;
    };
    log::debug!("Wallet exists, checking authorized accounts");

    match authorized_account(wallet, config).await {
        Ok(Some(account)) => {
            log::info!("Found an authorized account: {}", account);
            Some(SessionUpdate::Connected {
                account,
                network_mismatch: Some(false),
            })
        }
        Ok(None) => {
            log::info!("No authorized account found on {}", config.network_name);
            Some(SessionUpdate::WrongNetwork)
        }
        Err(e) => {
            log::warn!("Connection check failed: {}", e);
            None
        }
    }
}

async fn authorized_account<W>(wallet: &W, config: &MintConfig) -> ActionResult<Option<Address>>
where
    W: AccountQuery + NetworkQuery,
{
    let accounts = wallet.accounts().await?;
    let chain_id = wallet.chain_id().await?;

    if chain_id != config.chain_id {
        log::debug!("Wallet on chain {}, expected {}", chain_id, config.chain_id);
        return Ok(None);
    }
    Ok(accounts.into_iter().next())
}

// =============================================================================
// Wallet connector
// =============================================================================

/// Ask the wallet for an account (user clicked "Connect").
///
/// Without a wallet the user gets a blocking alert. On the wrong network
/// no account is requested.
pub async fn connect<W, N>(wallet: Option<&W>, notifier: &N, config: &MintConfig) -> Option<SessionUpdate>
where
    W: AccountQuery + NetworkQuery,
    N: Notifier,
{
    match try_connect(wallet, config).await {
        Ok(account) => {
            log::info!("Found an account! Address: {}", account);
            Some(SessionUpdate::Connected {
                account,
                network_mismatch: None,
            })
        }
        Err(ActionError::CapabilityAbsent) => {
            notifier.alert(INSTALL_WALLET_ALERT);
            None
        }
        Err(ActionError::NetworkMismatch { expected, actual }) => {
            log::warn!("Wallet on chain {}, expected {}", actual, expected);
            Some(SessionUpdate::WrongNetwork)
        }
        Err(e) => {
            log::error!("Wallet connection failed: {}", e);
            None
        }
    }
}

async fn try_connect<W>(wallet: Option<&W>, config: &MintConfig) -> ActionResult<Address>
where
    W: AccountQuery + NetworkQuery,
{
    let wallet = wallet.ok_or(ActionError::CapabilityAbsent)?;

    let chain_id = wallet.chain_id().await?;
    if chain_id != config.chain_id {
        return Err(ActionError::NetworkMismatch {
            expected: config.chain_id.value(),
            actual: chain_id.value(),
        });
    }

    let accounts = wallet.request_accounts().await?;
    accounts
        .into_iter()
        .next()
        .ok_or_else(|| WalletError::NoAccounts.into())
}

// =============================================================================
// Mint action
// =============================================================================

/// Mint `config.mint_quantity` tokens.
///
/// `on_pending` receives `MintStatus(Mining)` before the wallet is touched,
/// so the UI can show the spinner while the prompt is open. The returned
/// update is either `MintConfirmed` or `MintStatus(Error)`.
pub async fn mint<P, F>(
    provider: Option<&P>,
    config: &MintConfig,
    contract: &ContractRef,
    on_pending: F,
) -> SessionUpdate
where
    P: AccountQuery + TransactionSubmission,
    F: FnOnce(SessionUpdate),
{
    on_pending(SessionUpdate::MintStatus(MintStatus::Mining));

    match try_mint(provider, config, contract).await {
        Ok(hash) => {
            log::info!("Mined, see transaction: {}", hash);
            SessionUpdate::MintConfirmed(hash)
        }
        Err(ActionError::CapabilityAbsent) => {
            log::error!("Ethereum object does not exist");
            SessionUpdate::MintStatus(MintStatus::Error)
        }
        Err(e) => {
            log::error!("Mint failed: {}", e);
            SessionUpdate::MintStatus(MintStatus::Error)
        }
    }
}

async fn try_mint<P>(provider: Option<&P>, config: &MintConfig, contract: &ContractRef) -> ActionResult<TxHash>
where
    P: AccountQuery + TransactionSubmission,
{
    let provider = provider.ok_or(ActionError::CapabilityAbsent)?;

    let overrides = TxOverrides {
        gas_limit: config.gas_limit,
        value: config.mint_value().map_err(ActionError::TransactionFailed)?,
    };

    let handle = NftContract::connect_signer(contract, provider)
        .await
        .map_err(ActionError::TransactionFailed)?;

    log::info!("Initialize payment");
    let pending = handle
        .mint_nfts(config.mint_quantity, overrides)
        .await
        .map_err(ActionError::TransactionFailed)?;

    log::info!("Mining... please wait ({})", pending.hash());
    let receipt = pending.wait().await.map_err(ActionError::TransactionFailed)?;
    Ok(receipt.transaction_hash)
}

// =============================================================================
// Minted-count fetcher
// =============================================================================

/// Read `getTotalMinted()`. Failures keep the previous count.
pub async fn fetch_total_minted<P>(provider: Option<&P>, contract: &ContractRef) -> Option<SessionUpdate>
where
    P: ReadOnlyQuery,
{
    let provider = provider?;

    match NftContract::new(contract, provider).total_minted().await {
        Ok(total) => {
            log::debug!("Total minted: {}", total);
            Some(SessionUpdate::MintedCount(total))
        }
        Err(e) => {
            log::warn!("{}", ActionError::QueryFailed(e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;
    use crate::testing::{account, tx_hash, FakeNotifier, FakeWallet};
    use crate::types::ChainId;
    use alloy_primitives::U256;
    use futures::poll;
    use std::cell::Cell;
    use std::pin::pin;

    fn setup() -> (MintConfig, ContractRef) {
        let config = MintConfig::default();
        let contract = config.contract().unwrap();
        (config, contract)
    }

    // -------------------------------------------------------------------------
    // check_connection
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_check_without_wallet() {
        let (config, _) = setup();
        let update = check_connection::<FakeWallet>(None, &config).await;
        assert_eq!(update, None);
        assert_eq!(SessionState::default().apply_all(update).account, None);
    }

    #[tokio::test]
    async fn test_check_authorized_on_expected_chain() {
        let (config, _) = setup();
        let wallet = FakeWallet::polygon(vec![account(0xab)]);

        let update = check_connection(Some(&wallet), &config).await;
        let state = SessionState::default()
            .apply(SessionUpdate::WrongNetwork)
            .apply_all(update);

        assert_eq!(state.account, Some(account(0xab)));
        assert_eq!(state.network_mismatch, Some(false));
    }

    #[tokio::test]
    async fn test_check_lists_accounts_before_chain() {
        let (config, _) = setup();
        let wallet = FakeWallet::polygon(vec![account(0xab)]);

        check_connection(Some(&wallet), &config).await;
        assert_eq!(wallet.requests(), vec!["eth_accounts", "eth_chainId"]);
    }

    #[tokio::test]
    async fn test_check_wrong_chain_sets_mismatch() {
        let (config, _) = setup();
        let wallet = FakeWallet::on_chain(ChainId::ETHEREUM, vec![account(0xab), account(0xcd)]);

        let update = check_connection(Some(&wallet), &config).await;
        assert_eq!(update, Some(SessionUpdate::WrongNetwork));

        let state = SessionState::default().apply_all(update);
        assert_eq!(state.account, None);
        assert_eq!(state.network_mismatch, Some(true));
    }

    #[tokio::test]
    async fn test_check_no_accounts_sets_mismatch() {
        let (config, _) = setup();
        let wallet = FakeWallet::polygon(vec![]);

        let update = check_connection(Some(&wallet), &config).await;
        assert_eq!(update, Some(SessionUpdate::WrongNetwork));
    }

    #[tokio::test]
    async fn test_check_failure_degrades_silently() {
        let (config, _) = setup();
        let wallet = FakeWallet::polygon(vec![account(0xab)]).failing_chain_id();

        assert_eq!(check_connection(Some(&wallet), &config).await, None);
    }

    // -------------------------------------------------------------------------
    // connect
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_connect_without_wallet_alerts() {
        let (config, _) = setup();
        let notifier = FakeNotifier::default();

        let update = connect::<FakeWallet, _>(None, &notifier, &config).await;
        assert_eq!(update, None);
        assert_eq!(notifier.alerts(), vec![INSTALL_WALLET_ALERT.to_string()]);
    }

    #[tokio::test]
    async fn test_connect_requests_accounts() {
        let (config, _) = setup();
        let notifier = FakeNotifier::default();
        let wallet = FakeWallet::polygon(vec![account(0xab), account(0xcd)]);

        let update = connect(Some(&wallet), &notifier, &config).await;
        assert_eq!(
            update,
            Some(SessionUpdate::Connected {
                account: account(0xab),
                network_mismatch: None,
            })
        );
        assert_eq!(wallet.requests(), vec!["eth_chainId", "eth_requestAccounts"]);
        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_connect_wrong_chain_skips_authorization() {
        let (config, _) = setup();
        let notifier = FakeNotifier::default();
        let wallet = FakeWallet::on_chain(ChainId::ETHEREUM, vec![account(0xab)]);

        let update = connect(Some(&wallet), &notifier, &config).await;
        assert_eq!(update, Some(SessionUpdate::WrongNetwork));
        assert_eq!(wallet.requests(), vec!["eth_chainId"]);
    }

    #[tokio::test]
    async fn test_connect_rejected_leaves_state() {
        let (config, _) = setup();
        let notifier = FakeNotifier::default();
        let wallet = FakeWallet::polygon(vec![account(0xab)]).failing_accounts();

        assert_eq!(connect(Some(&wallet), &notifier, &config).await, None);
        assert!(notifier.alerts().is_empty());
    }

    // -------------------------------------------------------------------------
    // mint
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_mint_success() {
        let (config, contract) = setup();
        let wallet = FakeWallet::polygon(vec![account(0xab)]);
        let pending = Cell::new(None);

        let update = mint(Some(&wallet), &config, &contract, |u| pending.set(Some(u))).await;

        assert_eq!(pending.take(), Some(SessionUpdate::MintStatus(MintStatus::Mining)));
        assert_eq!(update, SessionUpdate::MintConfirmed(tx_hash(0x42)));

        let sent = wallet.sent_transactions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].gas, 160_000);
        assert_eq!(sent[0].value, config.mint_value().unwrap());
        assert_eq!(sent[0].data[35], 1);
    }

    #[tokio::test]
    async fn test_mint_shows_mining_before_wallet_answers() {
        let (config, contract) = setup();
        let (wallet, release) = FakeWallet::polygon(vec![account(0xab)]).gated();
        let pending = Cell::new(None);

        let mut fut = pin!(mint(Some(&wallet), &config, &contract, |u| pending.set(Some(u))));
        assert!(poll!(fut.as_mut()).is_pending());

        let state = SessionState::default().apply_all(pending.take());
        assert_eq!(state.mint_status, MintStatus::Mining);

        release.send(()).unwrap();
        let state = state.apply(fut.await);
        assert_eq!(state.mint_status, MintStatus::Success);
    }

    #[tokio::test]
    async fn test_mint_without_wallet_is_error() {
        let (config, contract) = setup();
        let pending = Cell::new(None);

        let update = mint::<FakeWallet, _>(None, &config, &contract, |u| pending.set(Some(u))).await;
        assert_eq!(pending.take(), Some(SessionUpdate::MintStatus(MintStatus::Mining)));
        assert_eq!(update, SessionUpdate::MintStatus(MintStatus::Error));
    }

    #[tokio::test]
    async fn test_mint_failure_keeps_minted_count() {
        let (config, contract) = setup();
        let wallet = FakeWallet::polygon(vec![account(0xab)]).rejecting_send();
        let pending = Cell::new(None);

        let update = mint(Some(&wallet), &config, &contract, |u| pending.set(Some(u))).await;
        let state = SessionState::default()
            .apply(SessionUpdate::MintedCount(5))
            .apply_all(pending.take())
            .apply(update);

        assert_eq!(state.mint_status, MintStatus::Error);
        assert_eq!(state.minted_count, 5);
    }

    #[tokio::test]
    async fn test_mint_reverted_is_error() {
        let (config, contract) = setup();
        let wallet = FakeWallet::polygon(vec![account(0xab)]).reverting();

        let update = mint(Some(&wallet), &config, &contract, |_| {}).await;
        assert_eq!(update, SessionUpdate::MintStatus(MintStatus::Error));
    }

    #[tokio::test]
    async fn test_mint_without_signer_is_error() {
        let (config, contract) = setup();
        let wallet = FakeWallet::polygon(vec![]);

        let update = mint(Some(&wallet), &config, &contract, |_| {}).await;
        assert_eq!(update, SessionUpdate::MintStatus(MintStatus::Error));
        assert!(wallet.sent_transactions().is_empty());
    }

    // -------------------------------------------------------------------------
    // fetch_total_minted
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_fetch_total_minted() {
        let (_, contract) = setup();
        let wallet = FakeWallet::polygon(vec![]).with_minted(U256::from(5));

        let update = fetch_total_minted(Some(&wallet), &contract).await;
        assert_eq!(update, Some(SessionUpdate::MintedCount(5)));
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_count() {
        let (_, contract) = setup();
        let wallet = FakeWallet::polygon(vec![]).failing_call();

        let state = SessionState::default().apply(SessionUpdate::MintedCount(3));
        let state = state.apply_all(fetch_total_minted(Some(&wallet), &contract).await);
        assert_eq!(state.minted_count, 3);

        assert_eq!(fetch_total_minted::<FakeWallet>(None, &contract).await, None);
    }
}
