//! HTTP provider for the Google Places and Geocoding APIs.

use std::future::Future;

use geo::Coord;
use log::{debug, info, warn};
use nearbite_core::{GeocodeError, Geocoder, PlaceSearch, PlaceSearchError, RawPlace};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::config::{GooglePlacesConfig, ProviderBuildError, StaticMapView};
use super::wire::{
    GeocodeResponse, NearbySearchResponse, PlaceResult, STATUS_OK, STATUS_ZERO_RESULTS,
};

/// Width requested for place photos.
pub const PHOTO_MAX_WIDTH: u32 = 400;

/// Place type requested from Nearby Search.
const RESTAURANT_TYPE: &str = "restaurant";

/// Replacement for the API key in logged and reported URLs.
const REDACTED: &str = "REDACTED";

/// Failure shared by both APIs before a payload is interpreted.
#[derive(Debug)]
enum TransportError {
    Network { url: String, message: String },
    Timeout { url: String, timeout_secs: u64 },
    HttpStatus { url: String, status: u16, message: String },
    Parse { message: String },
}

impl From<TransportError> for PlaceSearchError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Network { url, message } => Self::Network { url, message },
            TransportError::Timeout { url, timeout_secs } => Self::Timeout { url, timeout_secs },
            TransportError::HttpStatus {
                url,
                status,
                message,
            } => Self::HttpStatus {
                url,
                status,
                message,
            },
            TransportError::Parse { message } => Self::Parse { message },
        }
    }
}

impl From<TransportError> for GeocodeError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Network { url, message } => Self::Network { url, message },
            TransportError::Timeout { url, timeout_secs } => Self::Timeout { url, timeout_secs },
            TransportError::HttpStatus {
                url,
                status,
                message,
            } => Self::HttpStatus {
                url,
                status,
                message,
            },
            TransportError::Parse { message } => Self::Parse { message },
        }
    }
}

#[derive(Debug, Clone)]
struct Endpoints {
    nearby_search: Url,
    geocode: Url,
    photo: Url,
    static_map: Url,
}

impl Endpoints {
    fn resolve(base_url: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        Ok(Self {
            nearby_search: base.join("place/nearbysearch/json")?,
            geocode: base.join("geocode/json")?,
            photo: base.join("place/photo")?,
            static_map: base.join("staticmap")?,
        })
    }
}

/// Google Maps provider implementing [`PlaceSearch`] and [`Geocoder`].
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the provider uses its own
/// stored runtime. When called from within a multi-threaded Tokio runtime it
/// uses that runtime's handle with [`tokio::task::block_in_place`]. Inside a
/// `current_thread` runtime it falls back to its own runtime, which blocks
/// the caller's runtime for the duration of the request.
pub struct GoogleMapsProvider {
    client: Client,
    config: GooglePlacesConfig,
    endpoints: Endpoints,
    runtime: Runtime,
}

impl std::fmt::Debug for GoogleMapsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleMapsProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl GoogleMapsProvider {
    /// Create a provider for the public endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(GooglePlacesConfig::new(api_key))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty, the base URL is invalid, or the
    /// HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: GooglePlacesConfig) -> Result<Self, ProviderBuildError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderBuildError::MissingApiKey);
        }
        let endpoints = Endpoints::resolve(&config.base_url).map_err(|source| {
            ProviderBuildError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                source,
            }
        })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoints,
            runtime,
        })
    }

    /// Places Photo URL for a photo reference.
    ///
    /// The URL carries the API key so a client can fetch the image directly.
    #[must_use]
    pub fn photo_url(&self, photo_reference: &str) -> Url {
        let mut url = self.endpoints.photo.clone();
        url.query_pairs_mut()
            .append_pair("maxwidth", &PHOTO_MAX_WIDTH.to_string())
            .append_pair("photoreference", photo_reference)
            .append_pair("key", &self.config.api_key);
        url
    }

    /// Static Maps URL centred on `centre`.
    #[must_use]
    pub fn static_map_url(&self, centre: Coord<f64>, view: StaticMapView) -> Url {
        let mut url = self.endpoints.static_map.clone();
        url.query_pairs_mut()
            .append_pair("center", &format!("{},{}", centre.y, centre.x))
            .append_pair("zoom", &view.zoom.to_string())
            .append_pair("size", &format!("{}x{}", view.width, view.height))
            .append_pair("key", &self.config.api_key);
        url
    }

    fn nearby_search_url(&self, centre: Coord<f64>, radius_meters: u32) -> Url {
        let mut url = self.endpoints.nearby_search.clone();
        url.query_pairs_mut()
            .append_pair("location", &format!("{},{}", centre.y, centre.x))
            .append_pair("radius", &radius_meters.to_string())
            .append_pair("type", RESTAURANT_TYPE)
            .append_pair("key", &self.config.api_key);
        url
    }

    fn geocode_url(&self, address: &str) -> Url {
        let mut url = self.endpoints.geocode.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", &self.config.api_key);
        url
    }

    /// Run `future` to completion on a suitable runtime.
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }

    /// Fetch `url` and decode its JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TransportError> {
        let shown = redact(&url);
        info!("GET {shown}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &shown))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err, &shown))?;

        let body = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &shown))?;

        serde_json::from_slice(&body).map_err(|err| TransportError::Parse {
            message: err.to_string(),
        })
    }

    /// Convert a reqwest error, stripping the unredacted URL it carries.
    fn convert_reqwest_error(&self, error: reqwest::Error, shown: &str) -> TransportError {
        let error = error.without_url();
        if error.is_timeout() {
            return TransportError::Timeout {
                url: shown.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return TransportError::HttpStatus {
                url: shown.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        if error.is_decode() {
            return TransportError::Parse {
                message: error.to_string(),
            };
        }

        TransportError::Network {
            url: shown.to_owned(),
            message: error.to_string(),
        }
    }

    /// Interpret a Nearby Search payload.
    fn convert_nearby(
        &self,
        response: NearbySearchResponse,
    ) -> Result<Vec<RawPlace>, PlaceSearchError> {
        match response.status.as_str() {
            STATUS_OK => {}
            STATUS_ZERO_RESULTS => return Ok(Vec::new()),
            _ => {
                return Err(PlaceSearchError::ServiceStatus {
                    status: response.status,
                    message: response.error_message.unwrap_or_default(),
                });
            }
        }
        let places: Vec<RawPlace> = response
            .results
            .into_iter()
            .map(|place| self.raw_place(place))
            .collect();
        debug!("nearby search mapped {} places", places.len());
        Ok(places)
    }

    fn raw_place(&self, place: PlaceResult) -> RawPlace {
        let PlaceResult {
            place_id,
            name,
            geometry,
            user_ratings_total,
            types,
            vicinity,
            photos,
        } = place;
        RawPlace {
            id: place_id,
            name,
            location: geometry.location.into(),
            popularity: user_ratings_total,
            categories: types,
            vicinity,
            photo_url: photos
                .first()
                .map(|photo| self.photo_url(&photo.photo_reference).into()),
        }
    }
}

/// Interpret a Geocoding payload for `address`.
fn convert_geocode(address: &str, response: GeocodeResponse) -> Result<Coord<f64>, GeocodeError> {
    let no_match = || GeocodeError::NoMatch {
        address: address.to_owned(),
    };
    match response.status.as_str() {
        STATUS_OK => response
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location.into())
            .ok_or_else(no_match),
        STATUS_ZERO_RESULTS => Err(no_match()),
        _ => Err(GeocodeError::ServiceStatus {
            status: response.status,
            message: response.error_message.unwrap_or_default(),
        }),
    }
}

/// Render `url` with the `key` parameter masked.
fn redact(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let shown = if name == "key" {
                REDACTED.to_owned()
            } else {
                value.into_owned()
            };
            (name.into_owned(), shown)
        })
        .collect();
    let mut shown = url.clone();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.into()
}

impl PlaceSearch for GoogleMapsProvider {
    /// Search for restaurants within `radius_meters` of `centre`.
    ///
    /// `ZERO_RESULTS` is reported as an empty list.
    fn search_nearby(
        &self,
        centre: Coord<f64>,
        radius_meters: u32,
    ) -> Result<Vec<RawPlace>, PlaceSearchError> {
        let url = self.nearby_search_url(centre, radius_meters);
        let response: NearbySearchResponse = self.block_on(self.fetch_json(url))?;
        self.convert_nearby(response).inspect_err(|err| {
            warn!("nearby search failed: {err}");
        })
    }
}

impl Geocoder for GoogleMapsProvider {
    fn geocode(&self, address: &str) -> Result<Coord<f64>, GeocodeError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        let url = self.geocode_url(trimmed);
        let response: GeocodeResponse = self.block_on(self.fetch_json(url))?;
        convert_geocode(trimmed, response)
    }
}
