use std::future::Future;

use super::SubmissionGuard;
use crate::domain::entities::GroupInfo;

/// Call-to-action card for a group: metadata, one button, optional tips line.
///
/// Each prompt owns its guard, so prompts never share submission state.
#[derive(Debug)]
pub struct JoinPrompt {
    pub group: Option<GroupInfo>,
    pub button: String,
    pub tips: Option<String>,
    pub tips_style: Option<String>,
    pub disabled: bool,
    pub loading: bool,
    guard: SubmissionGuard,
}

impl JoinPrompt {
    pub fn new(group: Option<GroupInfo>, button: impl Into<String>) -> Self {
        Self {
            group,
            button: button.into(),
            tips: None,
            tips_style: None,
            disabled: false,
            loading: false,
            guard: SubmissionGuard::new(),
        }
    }

    pub fn with_tips(mut self, tips: impl Into<String>) -> Self {
        self.tips = Some(tips.into());
        self
    }

    pub fn with_tips_style(mut self, style: impl Into<String>) -> Self {
        self.tips_style = Some(style.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.is_busy()
    }

    /// Text rendering of the card, nothing without group info
    pub fn render(&self) -> Option<String> {
        let group = self.group.as_ref()?;

        let mut out = String::new();
        out.push_str(&group.name);
        out.push('\n');
        if !group.description.is_empty() {
            out.push_str(&group.description);
            out.push('\n');
        }
        if !group.icon_url.is_empty() {
            out.push_str(&format!("icon: {}\n", group.icon_url));
        }

        let state = if self.loading {
            " (loading)"
        } else if self.disabled {
            " (disabled)"
        } else {
            ""
        };
        out.push_str(&format!("[ {} ]{}", self.button, state));

        if let Some(tips) = &self.tips {
            out.push('\n');
            match &self.tips_style {
                Some(style) => out.push_str(&format!("{} ({})", tips, style)),
                None => out.push_str(tips),
            }
        }
        Some(out)
    }

    /// Press the button. Ignored while disabled, loading, or already submitting.
    pub async fn activate<F, Fut>(&self, action: F) -> Option<Fut::Output>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        if self.group.is_none() || self.disabled || self.loading {
            tracing::debug!("Join prompt inactive, ignoring activation");
            return None;
        }
        self.guard.run(action).await
    }

    /// Click on the tips line. Runs `action` right away whenever a tips line is
    /// shown; it is not guarded and ignores `disabled`/`loading`.
    pub fn activate_tips<F, T>(&self, action: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        if self.group.is_none() || self.tips.is_none() {
            return None;
        }
        Some(action())
    }

    /// Force-clear the submission flag, even while an `activate` is pending.
    /// That run still clears the flag again when it completes.
    pub fn teardown(&self) {
        self.guard.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    fn group() -> GroupInfo {
        GroupInfo::new("g1")
            .with_name("Rustaceans")
            .with_description("Group for Rust people")
            .with_icon_url("https://example.com/icon.png")
    }

    #[test]
    fn test_render_without_group_is_empty() {
        let prompt = JoinPrompt::new(None, "Join");
        assert!(prompt.render().is_none());
    }

    #[test]
    fn test_render_card() {
        let prompt = JoinPrompt::new(Some(group()), "Join")
            .with_tips("Read the rules first")
            .with_tips_style("muted");

        let card = prompt.render().unwrap();
        assert!(card.starts_with("Rustaceans\nGroup for Rust people\n"));
        assert!(card.contains("icon: https://example.com/icon.png"));
        assert!(card.contains("[ Join ]"));
        assert!(card.ends_with("Read the rules first (muted)"));
    }

    #[tokio::test]
    async fn test_disabled_prompt_ignores_activation() {
        let prompt = JoinPrompt::new(Some(group()), "Join").disabled(true);
        assert_eq!(prompt.activate(|| async { 1 }).await, None);

        let prompt = JoinPrompt::new(Some(group()), "Join").loading(true);
        assert_eq!(prompt.activate(|| async { 1 }).await, None);
    }

    #[test]
    fn test_tips_click() {
        let prompt = JoinPrompt::new(Some(group()), "Join");
        assert_eq!(prompt.activate_tips(|| "clicked"), None);

        let prompt = JoinPrompt::new(Some(group()), "Join")
            .with_tips("Read the rules first")
            .disabled(true);
        assert_eq!(prompt.activate_tips(|| "clicked"), Some("clicked"));

        let prompt = JoinPrompt::new(None, "Join").with_tips("hidden");
        assert_eq!(prompt.activate_tips(|| "clicked"), None);
    }

    #[tokio::test]
    async fn test_tips_click_while_submitting() {
        let prompt = JoinPrompt::new(Some(group()), "Join").with_tips("Need help?");
        let (tx, rx) = oneshot::channel::<()>();

        let pending = prompt.activate(move || async move {
            let _ = rx.await;
        });
        let click = async {
            tokio::task::yield_now().await;
            assert!(prompt.is_submitting());
            let out = prompt.activate_tips(|| 42);
            let _ = tx.send(());
            out
        };

        let (a, b) = tokio::join!(pending, click);
        assert!(a.is_some());
        assert_eq!(b, Some(42));
    }

    #[tokio::test]
    async fn test_prompts_do_not_share_guards() {
        let first = JoinPrompt::new(Some(group()), "Join");
        let second = JoinPrompt::new(Some(group()), "Join");
        let (tx, rx) = oneshot::channel::<()>();

        let pending = first.activate(move || async move {
            let _ = rx.await;
        });
        let other = async {
            tokio::task::yield_now().await;
            assert!(first.is_submitting());
            let out = second.activate(|| async { "ran" }).await;
            let _ = tx.send(());
            out
        };

        let (a, b) = tokio::join!(pending, other);
        assert!(a.is_some());
        assert_eq!(b, Some("ran"));
    }

    #[tokio::test]
    async fn test_teardown_resets_guard() {
        let prompt = JoinPrompt::new(Some(group()), "Join");
        let (tx, rx) = oneshot::channel::<()>();

        let pending = prompt.activate(move || async move {
            let _ = rx.await;
        });
        let teardown = async {
            tokio::task::yield_now().await;
            assert!(prompt.is_submitting());
            prompt.teardown();
            assert!(!prompt.is_submitting());
            let _ = tx.send(());
        };

        tokio::join!(pending, teardown);
        assert!(!prompt.is_submitting());
    }
}
