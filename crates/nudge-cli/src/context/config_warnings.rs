use nudge_config::NudgeConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &NudgeConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &NudgeConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.notion.is_configured() && has_single_underscore_key(&env_keys, "NUDGE_NOTION") {
        warnings.push(
            "Notion config appears default while NUDGE_NOTION_* env vars exist. Use double underscores (example: NUDGE_NOTION__API_KEY)."
                .to_string(),
        );
    }

    if !config.slack.is_configured() && has_single_underscore_key(&env_keys, "NUDGE_SLACK") {
        warnings.push(
            "Slack config appears default while NUDGE_SLACK_* env vars exist. Use double underscores (example: NUDGE_SLACK__WEBHOOK_URL)."
                .to_string(),
        );
    }

    if env_keys.iter().any(|key| key == "CRON_SCHEDULE") {
        warnings.push(
            "CRON_SCHEDULE is not supported; set NUDGE_SCHEDULE__INTERVAL_SECS instead."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
