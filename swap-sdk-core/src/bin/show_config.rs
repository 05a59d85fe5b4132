use anyhow::Context;
use swap_sdk_core::{wrapped_native, BaseCurrency, SdkConfig, TokenList, TokenRepository};

fn main() -> anyhow::Result<()> {
    swap_sdk_core::init().context("Failed to initialize logging")?;
    let config = SdkConfig::from_env().context("Failed to load configuration")?;
    let chain = config.default_chain;

    println!("Swap SDK Core Configuration:\n");
    println!("  Default Chain: {} (id {})", chain, chain.id());
    match wrapped_native(chain) {
        Some(token) => {
            println!("  Wrapped Native: {}", token);
            println!("    Decimals: {}", token.decimals());
            println!("    Name: {}", token.name().unwrap_or("(not set)"));
            println!("    Project Link: {}", token.project_link().unwrap_or("(not set)"));
        }
        None => println!("  Wrapped Native: (none registered)"),
    }

    match &config.token_list {
        Some(path) => {
            let list = TokenList::load(path)
                .with_context(|| format!("Failed to load token list {}", path.display()))?;
            let tokens = list.sorted_tokens_on(chain)?;
            println!("  Token List: {} ({} tokens on {})", path.display(), tokens.len(), chain);
            for token in tokens {
                println!("    {}", token);
            }
        }
        None => println!("  Token List: (not set)"),
    }

    Ok(())
}
