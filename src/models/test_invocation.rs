use crate::utils::constant::GUARD_TEST_TARGETS;

/// How the process was launched, as far as test runners are concerned.
///
/// Computed once at startup (see [`TestInvocation::from_args`]) and injected
/// into the guard settings, so tests can pick whichever mode they need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestInvocation {
    running_tests: bool,
    targets: Vec<String>,
}

impl TestInvocation {
    /// Not a test run. The guard is always active.
    pub fn none() -> Self {
        Self::default()
    }

    /// A test run that requested `targets`.
    pub fn running<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            running_tests: true,
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Detects a test run from process arguments.
    ///
    /// A `manage.py ... test` invocation or any `nosetests` invocation counts
    /// as a test run; every argument is treated as a requested target.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let using_manage = args.iter().any(|arg| arg.contains("manage.py"));
        let has_arg = |wanted: &str| args.iter().any(|arg| arg == wanted);
        let running_tests = (using_manage && has_arg("test")) || has_arg("nosetests");

        Self {
            running_tests,
            targets: args,
        }
    }

    pub fn is_running_tests(&self) -> bool {
        self.running_tests
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// `true` when this is a test run that does not target the guard itself.
    pub fn bypasses_guard(&self) -> bool {
        self.running_tests
            && !self
                .targets
                .iter()
                .any(|target| GUARD_TEST_TARGETS.contains(&target.as_str()))
    }
}
