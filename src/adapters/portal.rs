use std::ffi::OsStr;
use std::sync::Arc;

use async_trait::async_trait;
use headless_chrome::{browser::tab::NoElementFound, Browser, LaunchOptions, Tab};
use tokio::task::{spawn_blocking, JoinError};

use crate::domain::model::PostId;
use crate::domain::ports::PortalSession;
use crate::utils::error::{NotifierError, Result};

pub const PORTAL_URL: &str = "https://placement.iitk.ac.in/";

const USERNAME_FIELD: &str = "#id_username";
const PASSWORD_FIELD: &str = "#id_password";
const SUBMIT_BUTTON: &str = "input.btn";
const POST_PANEL: &str = "div.panel-collapse.collapse";

/// `PortalSession` backed by a headless Chrome instance. The browser API is
/// blocking, so every call runs under `spawn_blocking` against a shared tab.
pub struct PortalBrowser {
    browser: Option<Browser>,
    tab: Arc<Tab>,
}

impl PortalBrowser {
    /// Launch the browser process and open one tab. Failures here are the
    /// session-could-not-start class; nothing has touched the portal yet.
    pub fn launch() -> Result<Self> {
        let browser = Browser::new(LaunchOptions {
            headless: true,
            args: vec![OsStr::new("--disable-blink-features=AutomationControlled")],
            ..LaunchOptions::default()
        })?;
        let tab = browser.new_tab()?;

        Ok(Self {
            browser: Some(browser),
            tab,
        })
    }
}

#[async_trait]
impl PortalSession for PortalBrowser {
    async fn login(&self, user: &str, password: &str) -> Result<()> {
        let tab = Arc::clone(&self.tab);
        let user = user.to_owned();
        let password = password.to_owned();

        spawn_blocking(move || -> Result<()> {
            tab.navigate_to(PORTAL_URL)?;
            tab.wait_until_navigated()?;
            tracing::info!("connected with {PORTAL_URL}");

            tab.find_element(USERNAME_FIELD)
                .map_err(|e| element_error(e, USERNAME_FIELD))?
                .type_into(&user)?;
            tab.find_element(PASSWORD_FIELD)
                .map_err(|e| element_error(e, PASSWORD_FIELD))?
                .type_into(&password)?;
            tab.find_element(SUBMIT_BUTTON)
                .map_err(|e| element_error(e, SUBMIT_BUTTON))?
                .click()?;
            tab.wait_until_navigated()?;

            Ok(())
        })
        .await
        .map_err(join_error)?
    }

    async fn latest_post_id(&self) -> Result<PostId> {
        let tab = Arc::clone(&self.tab);

        spawn_blocking(move || -> Result<PostId> {
            // The first collapsible panel is the most recent post; its id
            // attribute carries the numeric post ID after a literal prefix.
            let panel = tab
                .find_element(POST_PANEL)
                .map_err(|e| element_error(e, POST_PANEL))?;

            let attributes = panel.get_attributes()?.unwrap_or_default();
            let id_attr = attributes
                .chunks_exact(2)
                .find(|pair| pair[0] == "id")
                .map(|pair| pair[1].clone())
                .ok_or_else(|| NotifierError::ElementNotFound {
                    selector: POST_PANEL.to_owned(),
                })?;

            PostId::from_element_id(&id_attr).ok_or_else(|| NotifierError::ElementNotFound {
                selector: format!("{POST_PANEL}#{id_attr}"),
            })
        })
        .await
        .map_err(join_error)?
    }

    async fn close(&mut self) -> Result<()> {
        let Some(browser) = self.browser.take() else {
            return Ok(());
        };
        let tab = Arc::clone(&self.tab);

        spawn_blocking(move || {
            let _ = tab.close(true);
            // Dropping the handle ends the Chrome process.
            drop(browser);
        })
        .await
        .map_err(join_error)?;

        Ok(())
    }
}

fn element_error(err: anyhow::Error, selector: &str) -> NotifierError {
    if err.is::<NoElementFound>() {
        NotifierError::ElementNotFound {
            selector: selector.to_owned(),
        }
    } else {
        NotifierError::Session(err)
    }
}

fn join_error(err: JoinError) -> NotifierError {
    NotifierError::Session(err.into())
}
