/// Axis of versioning advanced by a single bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpAxis {
    Release,
    Feature,
    Patch,
    State,
    Increment,
}

/// A bump request.
///
/// Several flags may be set at once; only the one with the highest precedence
/// (release > feature > patch > state > increment) is applied. `build` and
/// `host` are overrides that apply regardless of which axis fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionBump {
    pub release: bool,
    pub feature: bool,
    pub patch: bool,
    pub state: bool,
    pub increment: bool,
    pub build: Option<u32>,
    pub host: Option<(u32, u32, u32)>,
}

impl VersionBump {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn release(mut self) -> Self {
        self.release = true;
        self
    }

    pub fn feature(mut self) -> Self {
        self.feature = true;
        self
    }

    pub fn patch(mut self) -> Self {
        self.patch = true;
        self
    }

    pub fn state(mut self) -> Self {
        self.state = true;
        self
    }

    pub fn increment(mut self) -> Self {
        self.increment = true;
        self
    }

    /// Sets the build number of the bumped version
    pub fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    /// Sets the host-application version floor of the bumped version
    pub fn with_host(mut self, release: u32, feature: u32, patch: u32) -> Self {
        self.host = Some((release, feature, patch));
        self
    }

    /// Resolves which axis this request advances, if any
    pub fn axis(&self) -> Option<BumpAxis> {
        if self.release {
            Some(BumpAxis::Release)
        } else if self.feature {
            Some(BumpAxis::Feature)
        } else if self.patch {
            Some(BumpAxis::Patch)
        } else if self.state {
            Some(BumpAxis::State)
        } else if self.increment {
            Some(BumpAxis::Increment)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_has_no_axis() {
        assert_eq!(VersionBump::new().axis(), None);
        assert_eq!(VersionBump::new().with_build(3).axis(), None);
    }

    #[test]
    fn test_precedence() {
        let all = VersionBump::new()
            .increment()
            .state()
            .patch()
            .feature()
            .release();
        assert_eq!(all.axis(), Some(BumpAxis::Release));

        let no_release = VersionBump::new().increment().state().patch().feature();
        assert_eq!(no_release.axis(), Some(BumpAxis::Feature));

        assert_eq!(
            VersionBump::new().increment().state().patch().axis(),
            Some(BumpAxis::Patch)
        );
        assert_eq!(
            VersionBump::new().increment().state().axis(),
            Some(BumpAxis::State)
        );
        assert_eq!(
            VersionBump::new().increment().axis(),
            Some(BumpAxis::Increment)
        );
    }

    #[test]
    fn test_overrides() {
        let bump = VersionBump::new().with_build(9).with_host(4, 1, 0);
        assert_eq!(bump.build, Some(9));
        assert_eq!(bump.host, Some((4, 1, 0)));
    }
}
