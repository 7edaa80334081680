use apisign_core::{Context, OsEnv, Result};
use apisign_salted_hmac::{Config, RequestSigner, SigningOptions};

fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    // Set APISIGN_ACCESS_KEY and APISIGN_SECRET_KEY before running.
    let ctx = Context::new().with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    let signer = RequestSigner::from_config(config)?;

    let headers = signer.sign(
        "POST",
        "/v1/orders",
        SigningOptions::new().with_body(r#"{"quantity":3,"symbol":"BTC"}"#),
    )?;

    for (name, value) in headers.iter() {
        println!("{name}: {value}");
    }

    Ok(())
}
