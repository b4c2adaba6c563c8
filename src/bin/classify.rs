use std::collections::HashMap;
use std::env;
use std::result::Result;

use tokio::runtime::Builder;

use payment_method_classifier::config::AppClassifierCfg;
use payment_method_classifier::constant::env_vars::EXPECTED_LABELS;
use payment_method_classifier::logging::{app_log_event, AppLogLevel};
use payment_method_classifier::AppSharedState;

enum CliCommand {
    Classify(Vec<String>),
    CustomerByEmail(String),
}

fn parse_args(mut args: Vec<String>) -> Result<CliCommand, ()> {
    if args.first().map(|a| a.as_str()) == Some("--email") {
        if args.len() == 2 {
            Ok(CliCommand::CustomerByEmail(args.remove(1)))
        } else {
            println!("[ERROR] usage: classify --email <address>");
            Err(())
        }
    } else if args.is_empty() {
        println!("[ERROR] usage: classify <charge-or-payment-intent-id> ...");
        Err(())
    } else {
        Ok(CliCommand::Classify(args))
    }
}

fn init_config() -> Result<AppClassifierCfg, ()> {
    let iter = env::vars().filter(|(k, _v)| EXPECTED_LABELS.contains(&k.as_str()));
    let env_var_map = HashMap::from_iter(iter);
    AppClassifierCfg::from_env_map(env_var_map).map_err(|e| {
        println!(
            "[ERROR] config failure, code:{:?}, detail:{:?}",
            e.code, e.detail
        );
    })
}

async fn start_cmd(shr_state: AppSharedState, cmd: CliCommand) {
    let logctx = shr_state.log_context();
    match cmd {
        CliCommand::Classify(ids) => {
            let classifier = shr_state.classifier();
            for id in ids {
                let result = classifier.is_us_bank_transfer(id.as_str()).await;
                println!("{id} {result}");
            }
        }
        CliCommand::CustomerByEmail(email) => {
            let uc = shr_state.customer_lookup();
            match uc.find_by_email(email.as_str()).await {
                Some(customers) => {
                    customers
                        .iter()
                        .map(|c| println!("{}", c.id.as_str()))
                        .count();
                }
                None => {
                    app_log_event!(logctx, AppLogLevel::ERROR, "customer-search-failure");
                    println!("[ERROR] customer search failed, email:{email}");
                }
            }
        }
    }
}

fn main() -> Result<(), ()> {
    let cmd = parse_args(env::args().skip(1).collect())?;
    let cfg = init_config()?;
    let shr_state = AppSharedState::new(cfg).map_err(|e| {
        println!("[ERROR] shared state init failure, {:?}", e);
    })?;
    let runtime = Builder::new_current_thread()
        .thread_name("payment-method-classify")
        .enable_time()
        .enable_io()
        .build()
        .map_err(|e| {
            println!("[ERROR] runtime init failure, {:?}", e);
        })?;
    runtime.block_on(start_cmd(shr_state, cmd));
    Ok(())
}
