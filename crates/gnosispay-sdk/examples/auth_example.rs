/*
[INPUT]:  Wallet credentials from the environment (ADDRESS, PRIVATE_KEY)
[OUTPUT]: Authenticated session token and a first account read
[POS]:    Examples - authentication flow demonstration
[UPDATE]: When auth flow changes
*/

use gnosispay_sdk::*;

/// Example: Authentication flow
///
/// This example demonstrates the complete authentication flow:
/// 1. Create HTTP client with the application URI used in SIWE challenges
/// 2. Create auth manager
/// 3. Fetch nonce, build challenge, sign it and exchange it for a token
/// 4. Use the session for an authenticated call
#[tokio::main]
async fn main() {
    println!("=== Gnosis Pay Authentication Example ===\n");

    let (address, private_key) = match (std::env::var("ADDRESS"), std::env::var("PRIVATE_KEY")) {
        (Ok(address), Ok(private_key)) => (address, private_key),
        _ => {
            eprintln!("Set ADDRESS and PRIVATE_KEY to run this example");
            return;
        }
    };

    // Step 1: Create HTTP client
    let client = match GnosisPayClient::new().and_then(|c| c.with_siwe_params("https://gnosispay.com")) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    // Step 2: Create auth manager
    let auth_manager = AuthManager::new(client);
    println!("✓ Auth manager created");

    // Step 3: Authenticate
    if let Err(e) = auth_manager
        .authenticate_with_private_key(&address, &private_key)
        .await
    {
        eprintln!("Authentication failed: {}", e);
        return;
    }
    println!("✓ Authenticated as {}", address);
    if let Some(expires_at) = auth_manager.jwt_manager().expires_at() {
        println!("  Session expires at {}", expires_at);
    }

    // Step 4: Authenticated call
    match auth_manager.client().get_user().await {
        Ok(user) => println!("✓ User email: {}", user.email.unwrap_or_default()),
        Err(e) => eprintln!("Failed to load user: {}", e),
    }

    println!("\n✓ Authentication example complete");
}
