//! Single-movie details command.

use tokio::runtime::Runtime;

use super::build_service;
use crate::config::Config;
use crate::model::MovieDetails;

/// Show details for one movie
pub fn cmd_details(rt: &Runtime, config: &Config, id: &str, json: bool) -> anyhow::Result<()> {
    let service = build_service(config)?;
    let details = rt.block_on(service.fetch_movie_details(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        print!("{}", render(&details));
    }
    Ok(())
}

fn render(details: &MovieDetails) -> String {
    let mut out = format!("{} ({})\n", details.title, details.release_date);
    if !details.tagline.is_empty() {
        out.push_str(&format!("  \"{}\"\n", details.tagline));
    }
    out.push('\n');

    let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
    let mut field = |label: &str, value: String| {
        if !value.is_empty() {
            out.push_str(&format!("{:<10} {}\n", label, value));
        }
    };

    field("Rating", format!("{:.1} ({} votes)", details.vote_average, details.vote_count));
    if details.runtime > 0 {
        field("Runtime", format!("{} min", details.runtime));
    }
    field("Genres", genres.join(", "));
    field("Director", details.director.clone().unwrap_or_default());
    field("Cast", details.actors.as_deref().unwrap_or_default().join(", "));
    if details.budget > 0 {
        field("Budget", format!("${}", details.budget));
    }
    if details.revenue > 0 {
        field("Revenue", format!("${}", details.revenue));
    }
    field("IMDb", details.imdb_id.clone().unwrap_or_default());
    field("Poster", details.poster_path.clone().unwrap_or_default());

    out.push('\n');
    out.push_str(&details.overview);
    out.push('\n');
    out
}
