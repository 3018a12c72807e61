//! Field-by-field merge of catalog data and enrichment into canonical records.
//!
//! Everything here is pure: same stub + same enrichment always gives the same
//! record. Precedence is fixed:
//! - id, title, dates, overview, genres, rating and votes come from the catalog
//! - poster, cast, director and money figures come only from enrichment
//!
//! The one exception is the details overview, which falls back to the OMDb
//! plot when the catalog has none.

use crate::catalog::CatalogError;
use crate::catalog::dto::{CatalogIds, CatalogMovie, MovieDetailsResponse};
use crate::config::RatingScale;
use crate::enrichment::domain::EnrichmentRecord;
use crate::model::{
    Genre, Movie, MovieDetails, MovieIds, NO_OVERVIEW, ProductionCompany, UNKNOWN_RELEASE_DATE,
};

const DEFAULT_LANGUAGE: &str = "en";
const RELEASED: &str = "Released";

/// Normalize one list stub. Returns `None` when the stub has no catalog id.
pub fn normalize_stub(
    stub: &CatalogMovie,
    enrichment: Option<&EnrichmentRecord>,
    rating_scale: RatingScale,
) -> Option<Movie> {
    let id = stub.catalog_id()?;

    Some(Movie {
        id,
        title: stub.title.clone().unwrap_or_default(),
        release_date: release_date(stub.released.as_deref(), stub.year),
        overview: non_blank(stub.overview.as_deref())
            .unwrap_or(NO_OVERVIEW)
            .to_string(),
        poster_path: enrichment.and_then(|e| e.poster.clone()),
        vote_average: rating_scale.display(stub.rating),
        vote_count: stub.votes.unwrap_or(0),
        genres: stub.genres.clone().unwrap_or_default(),
    })
}

/// Normalize the details record.
///
/// Fails only when the catalog record has no Trakt id.
pub fn normalize_details(
    primary: &MovieDetailsResponse,
    enrichment: Option<&EnrichmentRecord>,
    rating_scale: RatingScale,
) -> Result<MovieDetails, CatalogError> {
    let id = primary.catalog_id().ok_or(CatalogError::MissingIdentifier)?;
    let title = primary.title.clone().unwrap_or_default();

    let overview = non_blank(primary.overview.as_deref())
        .or_else(|| enrichment.and_then(|e| non_blank(e.plot.as_deref())))
        .unwrap_or(NO_OVERVIEW)
        .to_string();

    let genres = primary
        .genres
        .iter()
        .flatten()
        .map(|name| Genre::named(name.as_str()))
        .collect();

    let production_companies = non_blank(primary.studio.as_deref())
        .map(|studio| vec![ProductionCompany::from_studio(studio)])
        .unwrap_or_default();

    Ok(MovieDetails {
        id,
        original_title: title.clone(),
        title,
        release_date: release_date(primary.released.as_deref(), primary.year),
        overview,
        genres,
        runtime: primary.runtime.unwrap_or(0),
        vote_average: rating_scale.display(primary.rating),
        vote_count: primary.votes.unwrap_or(0),
        tagline: primary.tagline.clone().unwrap_or_default(),
        poster_path: enrichment.and_then(|e| e.poster.clone()),
        actors: enrichment.and_then(|e| e.actors.clone()),
        director: enrichment.and_then(|e| e.director.clone()),
        ids: primary.ids.as_ref().map(to_model_ids).unwrap_or_default(),
        imdb_id: primary.imdb_id().map(String::from),
        budget: parse_amount(enrichment.and_then(|e| e.budget.as_deref())),
        revenue: parse_amount(enrichment.and_then(|e| e.box_office.as_deref())),
        production_companies,
        adult: false,
        video: false,
        popularity: 0.0,
        original_language: non_blank(primary.language.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string(),
        status: RELEASED.to_string(),
        backdrop_path: None,
        belongs_to_collection: None,
        homepage: None,
        production_countries: Vec::new(),
        spoken_languages: Vec::new(),
    })
}

/// Release date from a full date, else `YYYY-01-01` from the year, else `"N/A"`.
pub fn release_date(released: Option<&str>, year: Option<i32>) -> String {
    if let Some(date) = non_blank(released) {
        return date.to_string();
    }
    match year {
        Some(year) => format!("{year:04}-01-01"),
        None => UNKNOWN_RELEASE_DATE.to_string(),
    }
}

/// Parse a formatted money string such as `"$1,000,000"`.
///
/// Every non-digit is stripped first. Absent values, `"N/A"` and anything
/// that still fails to parse give 0.
pub fn parse_amount(value: Option<&str>) -> u64 {
    let Some(value) = value else {
        return 0;
    };
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

fn to_model_ids(ids: &CatalogIds) -> MovieIds {
    MovieIds {
        trakt: ids.trakt,
        slug: ids.slug.clone(),
        imdb: ids.imdb().map(String::from),
        tmdb: ids.tmdb,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
