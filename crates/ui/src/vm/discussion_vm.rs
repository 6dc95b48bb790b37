use course_core::model::{DiscussionError, DiscussionSettings, LessonId};
use services::DiscussionConfig;

pub const DISCUSSION_CONTAINER_ID: &str = "giscus-thread";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiscussionVm {
    Embed {
        mount_script: String,
        unmount_script: String,
    },
    NotConfigured {
        message: String,
    },
}

#[must_use]
pub fn discussion_vm(config: &DiscussionConfig, lesson: &LessonId) -> DiscussionVm {
    match config {
        Ok(settings) => DiscussionVm::Embed {
            mount_script: mount_script(settings, &lesson.path()),
            unmount_script: unmount_script(),
        },
        Err(err) => DiscussionVm::NotConfigured {
            message: not_configured_message(err),
        },
    }
}

#[must_use]
pub fn not_configured_message(err: &DiscussionError) -> String {
    match err {
        DiscussionError::NotConfigured { missing } => format!(
            "Giscus discussion is not configured. Please set {} in the environment or .env file.",
            missing.join(", ")
        ),
        DiscussionError::InvalidClientUrl(url) => {
            format!("Giscus discussion is misconfigured: invalid client URL {url}.")
        }
        other => format!("Giscus discussion is unavailable: {other}."),
    }
}

/// Script that injects the Giscus client into the container, once.
#[must_use]
pub fn mount_script(settings: &DiscussionSettings, term: &str) -> String {
    let mut script = String::new();
    script.push_str("(function () {\n");
    script.push_str(&format!(
        "  const container = document.getElementById({});\n",
        js_string(DISCUSSION_CONTAINER_ID)
    ));
    script.push_str("  if (!container || container.hasChildNodes()) { return; }\n");
    script.push_str("  const script = document.createElement(\"script\");\n");
    script.push_str(&format!(
        "  script.src = {};\n",
        js_string(settings.client_url().as_str())
    ));
    script.push_str("  script.async = true;\n");
    script.push_str("  script.crossOrigin = \"anonymous\";\n");
    for (name, value) in settings.script_attributes(term) {
        script.push_str(&format!(
            "  script.setAttribute({}, {});\n",
            js_string(name),
            js_string(&value)
        ));
    }
    script.push_str("  container.appendChild(script);\n");
    script.push_str("})();\n");
    script
}

#[must_use]
pub fn unmount_script() -> String {
    format!(
        "(function () {{\n  const container = document.getElementById({});\n  \
         if (container) {{ container.replaceChildren(); }}\n}})();\n",
        js_string(DISCUSSION_CONTAINER_ID)
    )
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
