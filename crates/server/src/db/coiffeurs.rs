//! Coiffeur repository for record store operations.
//!
//! All queries bind parameters at runtime; the column list is fixed and the
//! only dynamic part of any statement is the presence of the search filter.

use annuaire_core::{CoiffeurId, CoiffeurRecord, CoiffeurUpdate};
use sqlx::SqlitePool;

use super::RepositoryError;

/// Fixed page size for the paginated listing.
pub const PAGE_SIZE: i64 = 10;

const SELECT_COLUMNS: &str =
    "SELECT nom, numero, voie, code_postal, ville, latitude, longitude FROM coiffeurs";

/// Repository for coiffeur record operations.
///
/// Each operation acquires its own pooled connection and releases it when
/// the call returns, on success or failure. Acquisition failures surface as
/// [`RepositoryError::Unavailable`]; execution failures as
/// [`RepositoryError::Query`] or [`RepositoryError::Write`].
pub struct CoiffeurRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CoiffeurRepository<'a> {
    /// Create a new coiffeur repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch records, optionally filtered by a search term.
    ///
    /// An empty or absent term returns every record with no ordering
    /// guarantee. A non-empty term is lowercased and matched as a substring
    /// against each of the seven columns independently, so a record is
    /// returned if any one column contains it. Latitude and longitude are
    /// compared as their stored text.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if no connection can be
    /// acquired, `RepositoryError::Query` if the query fails.
    pub async fn search(
        &self,
        term: Option<&str>,
    ) -> Result<Vec<CoiffeurRecord>, RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(RepositoryError::Unavailable)?;

        match term.filter(|t| !t.is_empty()) {
            None => {
                sqlx::query_as::<_, CoiffeurRecord>(SELECT_COLUMNS)
                    .fetch_all(&mut *conn)
                    .await
            }
            Some(term) => {
                let pattern = format!("%{}%", term.to_lowercase());
                let query = format!(
                    "{SELECT_COLUMNS} WHERE LOWER(nom) LIKE ?1 \
                     OR LOWER(numero) LIKE ?1 \
                     OR LOWER(voie) LIKE ?1 \
                     OR LOWER(code_postal) LIKE ?1 \
                     OR LOWER(ville) LIKE ?1 \
                     OR LOWER(latitude) LIKE ?1 \
                     OR LOWER(longitude) LIKE ?1"
                );
                sqlx::query_as::<_, CoiffeurRecord>(&query)
                    .bind(pattern)
                    .fetch_all(&mut *conn)
                    .await
            }
        }
        .map_err(RepositoryError::Query)
    }

    /// Fetch one fixed-size page of records ordered ascending by `nom`.
    ///
    /// The name ordering is the one stability guarantee in the system:
    /// consecutive pages never overlap and together reconstruct the full
    /// sorted set. Page numbers below 1 are treated as 1; pages past the
    /// end of the data come back empty rather than failing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if no connection can be
    /// acquired, `RepositoryError::Query` if the query fails.
    pub async fn page(&self, page: i64) -> Result<Vec<CoiffeurRecord>, RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(RepositoryError::Unavailable)?;

        let offset = (page.max(1) - 1) * PAGE_SIZE;
        let query = format!("{SELECT_COLUMNS} ORDER BY nom ASC LIMIT ? OFFSET ?");

        sqlx::query_as::<_, CoiffeurRecord>(&query)
            .bind(PAGE_SIZE)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::Query)
    }

    /// Insert a record and return its store-assigned identity.
    ///
    /// No field is validated; absent fields are stored as NULL.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if no connection can be
    /// acquired, `RepositoryError::Write` if the insert fails.
    pub async fn insert(
        &self,
        record: &CoiffeurRecord,
    ) -> Result<CoiffeurId, RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(RepositoryError::Unavailable)?;

        let result = sqlx::query(
            "INSERT INTO coiffeurs (nom, numero, voie, code_postal, ville, latitude, longitude) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.nom.as_deref())
        .bind(record.numero.as_deref())
        .bind(record.voie.as_deref())
        .bind(record.code_postal.as_deref())
        .bind(record.ville.as_deref())
        .bind(record.latitude.as_deref())
        .bind(record.longitude.as_deref())
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::Write)?;

        Ok(CoiffeurId::new(result.last_insert_rowid()))
    }

    /// Update every record whose `nom` equals `key`.
    ///
    /// `nom` is not unique, so a duplicate name updates all matches; a key
    /// matching nothing is still a success (no row-count check). Latitude
    /// and longitude are not updatable here - [`CoiffeurUpdate`] carries no
    /// such fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if no connection can be
    /// acquired, `RepositoryError::Write` if the update fails.
    pub async fn update_by_name(
        &self,
        key: &str,
        fields: &CoiffeurUpdate,
    ) -> Result<(), RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(RepositoryError::Unavailable)?;

        sqlx::query(
            "UPDATE coiffeurs SET nom = ?, numero = ?, voie = ?, code_postal = ?, ville = ? \
             WHERE nom = ?",
        )
        .bind(fields.nom.as_deref())
        .bind(fields.numero.as_deref())
        .bind(fields.voie.as_deref())
        .bind(fields.code_postal.as_deref())
        .bind(fields.ville.as_deref())
        .bind(key)
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::Write)?;

        Ok(())
    }
}
