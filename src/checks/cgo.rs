//! C compiler availability for cgo.

use crate::host::Host;
use crate::shell::Platform;

use super::{Check, CheckOutcome};

/// What a working compiler prints when run without arguments.
const NO_INPUT_FILES: &str = "no input files";

const DEFAULT_COMPILER: &str = "gcc";

/// Checks that a C compiler is installed and usable.
///
/// The compiler is run with no arguments rather than looked up on the
/// search path: its exit status is always an error, but only an installed
/// compiler complains about missing input files. On macOS a stub `gcc` that
/// is waiting for the Xcode license to be accepted prints something else.
#[derive(Debug)]
pub struct CgoCheck {
    compiler: String,
    platform: Platform,
}

impl Default for CgoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl CgoCheck {
    /// Create a new compiler check.
    pub fn new() -> Self {
        Self {
            compiler: DEFAULT_COMPILER.to_string(),
            platform: Platform::current(),
        }
    }

    /// Compiler probed by the last run.
    pub fn compiler(&self) -> &str {
        &self.compiler
    }
}

impl Check for CgoCheck {
    fn name(&self) -> &'static str {
        "cgo"
    }

    fn probe(&mut self, host: &dyn Host) -> CheckOutcome {
        self.platform = host.platform();
        // cgo honors $CC the same way: the first word is the program, the
        // rest are extra arguments such as `-m64`.
        self.compiler = host
            .var_os("CC")
            .map(|cc| cc.to_string_lossy().trim().to_string())
            .filter(|cc| !cc.is_empty())
            .unwrap_or_else(|| DEFAULT_COMPILER.to_string());

        let mut words = self.compiler.split_whitespace();
        let program = words.next().unwrap_or(DEFAULT_COMPILER);
        let args: Vec<&str> = words.collect();

        let output = match host.run(program, &args) {
            Ok(out) => out.output,
            Err(e) => {
                tracing::debug!("cannot run {}: {}", self.compiler, e);
                String::new()
            }
        };
        CheckOutcome::from_bool(output.contains(NO_INPUT_FILES))
    }

    fn describe(&self) -> String {
        format!("Checking {} for CGO support", self.compiler)
    }

    fn explain(&self) -> String {
        let install = match self.platform {
            Platform::MacOS => {
                "- Install Xcode and run \"xcode-select --install\" to install command line tools.\n  \
                 Then, you may need to accept the license by running \"xcodebuild -license\"."
            }
            Platform::Windows | Platform::Linux => {
                "- Install gcc. See https://gcc.gnu.org/install/binaries.html."
            }
        };
        format!(
            "If you are going to use CGO, install a C compiler.\n{}\n\
             If you are not using CGO or using a different C compiler, ignore this message.",
            install
        )
    }
}
