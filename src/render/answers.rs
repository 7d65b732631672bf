/// Values collected from the user. Empty strings mean "not supplied" and
/// let the renderer fall back to detected or default values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub description: String,
    pub github_username: String,
    pub email: String,
    pub contributing: String,
    pub license: Option<String>,
    /// Replaces the generated installation block when non-empty
    pub installation: Option<String>,
    /// Replaces the generated usage block when non-empty
    pub usage: Option<String>,
}

fn supplied(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(value)
}

impl Answers {
    pub fn project_name(&self) -> Option<&str> {
        supplied(&self.project_name)
    }

    pub fn description(&self) -> Option<&str> {
        supplied(&self.description)
    }

    pub fn github_username(&self) -> Option<&str> {
        supplied(&self.github_username)
    }

    pub fn email(&self) -> Option<&str> {
        supplied(&self.email)
    }

    pub fn contributing(&self) -> Option<&str> {
        supplied(&self.contributing)
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref().and_then(supplied)
    }

    pub fn installation(&self) -> Option<&str> {
        self.installation.as_deref().and_then(supplied)
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref().and_then(supplied)
    }
}
