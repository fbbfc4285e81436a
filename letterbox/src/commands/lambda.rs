use letterbox_config::Config;

use crate::{email, environment};

pub async fn lambda(config: Config) -> anyhow::Result<()> {
    let email = email::connect(&config.email).await?;
    let handler = environment::contact_handler(&config, email)?;
    letterbox_api_lambda::run(handler).await
}
