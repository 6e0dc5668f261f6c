use super::*;
use std::str::FromStr;
use std::sync::OnceLock;

/// Which provider a [Provider] should hand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendPreference {
    /// The accelerated provider if it can be initialised, the standard provider otherwise.
    Auto,
    /// The accelerated provider or nothing.
    Accelerated,
    /// Always the standard provider.
    Standard,
}

impl FromStr for BackendPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "accelerated" => Ok(Self::Accelerated),
            "standard" => Ok(Self::Standard),
            _ => Err(format!("unknown backend preference: {}", s)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// The provider to be used.
    ///
    /// Defaults to [BackendPreference::Auto].
    pub backend: BackendPreference,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: BackendPreference::Auto,
        }
    }
}

/// Lazily selects and then holds the backend used by the ECDH and HMAC engines.
///
/// Probing happens on first use and only once per instance. Use [Provider::with_backend] to
/// bypass probing altogether (e.g. to inject a fake in tests).
pub struct Provider {
    config: ProviderConfig,
    backend: OnceLock<Result<Arc<dyn Backend>, CryptoError>>,
}

impl Provider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            backend: OnceLock::new(),
        }
    }

    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self {
            config: ProviderConfig::default(),
            backend: OnceLock::from(Ok(backend)),
        }
    }

    /// The process-wide provider with default configuration.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Provider> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::new(ProviderConfig::default()))
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// The selected backend.
    ///
    /// Fails with [CryptoError::BackendUnavailable] if no acceptable provider could be
    /// constructed. The outcome is remembered, so later calls fail the same way.
    pub fn backend(&self) -> Result<Arc<dyn Backend>, CryptoError> {
        self.backend.get_or_init(|| self.probe()).clone()
    }

    fn probe(&self) -> Result<Arc<dyn Backend>, CryptoError> {
        let backend = match self.config.backend {
            BackendPreference::Auto => match select_backend() {
                Some(b) => Ok(b),
                None => standard(),
            },
            BackendPreference::Accelerated => select_backend().ok_or(CryptoError::BackendUnavailable),
            BackendPreference::Standard => standard(),
        }?;
        log::debug!("Using {} crypto provider", backend.name());
        Ok(backend)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.backend.get() {
            Some(Ok(b)) => write!(f, "Provider({})", b.name()),
            Some(Err(e)) => write!(f, "Provider({})", e),
            None => write!(f, "Provider({:?}, not probed)", self.config.backend),
        }
    }
}

fn standard() -> Result<Arc<dyn Backend>, CryptoError> {
    match StandardBackend::new() {
        Ok(b) => Ok(Arc::new(b)),
        Err(e) => {
            log::error!("Standard crypto provider unavailable: {}", e);
            Err(CryptoError::BackendUnavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_01() {
        let c = ProviderConfig::default();
        assert_eq!(c.backend, BackendPreference::Auto);
    }

    #[test]
    fn test_preference_parse_01() {
        assert_eq!(Ok(BackendPreference::Auto), "auto".parse::<BackendPreference>());
        assert_eq!(Ok(BackendPreference::Standard), "standard".parse::<BackendPreference>());
        assert!("openssl".parse::<BackendPreference>().is_err());
    }

    #[test]
    fn test_standard_01() {
        let p = Provider::new(ProviderConfig {
            backend: BackendPreference::Standard,
        });
        assert_eq!("Provider(Standard, not probed)", format!("{:?}", p));
        assert_eq!(p.backend().unwrap().name(), "standard");
        assert_eq!("Provider(standard)", format!("{:?}", p));
    }

    #[test]
    fn test_auto_01() {
        let p = Provider::default();
        let name = p.backend().unwrap().name();
        if cfg!(feature = "openssl") {
            assert_eq!(name, "openssl");
        } else {
            assert_eq!(name, "standard");
        }
    }

    #[cfg(not(feature = "openssl"))]
    #[test]
    fn test_accelerated_01() {
        let p = Provider::new(ProviderConfig {
            backend: BackendPreference::Accelerated,
        });
        assert_eq!(Err(CryptoError::BackendUnavailable), p.backend().map(|b| b.name()));
        // the outcome is sticky
        assert!(p.backend().is_err());
    }

    #[test]
    fn test_with_backend_01() {
        let b: Arc<dyn Backend> = Arc::new(StandardBackend::new().unwrap());
        let p = Provider::with_backend(b.clone());
        assert!(Arc::ptr_eq(&b, &p.backend().unwrap()));
    }
}
