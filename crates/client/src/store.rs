use crate::api::{ApiClient, ApiError};
use futures::try_join;
use log::error;
use models::records::{ClassGroup, Discipline, Laboratory, Professor, ReservationDetails};

/// The only error a failed refresh reports
pub const FETCH_ERROR: &str = "Erro ao buscar dados do LabFácil.";

/// Every collection the screens read from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub reservations: Vec<ReservationDetails>,
    pub laboratories: Vec<Laboratory>,
    pub professors: Vec<Professor>,
    pub disciplines: Vec<Discipline>,
    pub class_groups: Vec<ClassGroup>,
}

impl Snapshot {
    /// Fetches the five collections in parallel; the first failure aborts
    /// the whole batch
    pub async fn fetch(api: &ApiClient) -> Result<Self, ApiError> {
        let (reservations, laboratories, professors, disciplines, class_groups) = try_join!(
            api.reservations(),
            api.laboratories(),
            api.professors(),
            api.disciplines(),
            api.class_groups(),
        )?;

        Ok(Self {
            reservations,
            laboratories,
            professors,
            disciplines,
            class_groups,
        })
    }
}

/// Client-side data store with loading and error flags
pub struct LabData {
    api: ApiClient,
    data: Snapshot,
    loading: bool,
    error: Option<String>,
}

impl LabData {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            data: Snapshot::default(),
            loading: false,
            error: None,
        }
    }

    /// Creates the store and performs the initial fetch
    pub async fn connect(api: ApiClient) -> Self {
        let mut store = Self::new(api);
        store.refetch().await;
        store
    }

    /// Replaces every collection at once, or keeps the previous ones and
    /// records [`FETCH_ERROR`]
    pub async fn refetch(&mut self) {
        self.loading = true;
        self.error = None;

        match Snapshot::fetch(&self.api).await {
            Ok(snapshot) => self.data = snapshot,
            Err(err) => {
                error!("Erro ao buscar dados: {err}");
                self.error = Some(FETCH_ERROR.to_string());
            }
        }

        self.loading = false;
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn data(&self) -> &Snapshot {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
