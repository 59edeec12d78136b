use super::{read_nfo, LoadedNfo};
use crate::output::Output;
use color_eyre::Result;
use media_nfo_core::kodi::values;
use media_nfo_models::{MediaIds, Movie, Rating, TvShow};
use serde_json::json;
use std::path::Path;

pub async fn run_show(file: &Path, output: &Output) -> Result<()> {
    let nfo = read_nfo(file).await?;
    tracing::info!(file = %file.display(), title = nfo.title(), "Read NFO file");

    if !output.is_human() {
        let record = match &nfo {
            LoadedNfo::Movie(movie) => serde_json::to_value(movie)?,
            LoadedNfo::Show(show) => serde_json::to_value(show)?,
        };
        output.document(&json!({
            "type": nfo.media_type().root_tag(),
            "file": file.display().to_string(),
            "record": record,
        }));
        return Ok(());
    }

    let rows = match &nfo {
        LoadedNfo::Movie(movie) => movie_rows(movie),
        LoadedNfo::Show(show) => show_rows(show),
    };

    output.table(&file.display().to_string(), nfo.media_type().root_tag(), rows);

    Ok(())
}

fn movie_rows(movie: &Movie) -> Vec<(&'static str, String)> {
    vec![
        ("Title", movie.title.clone()),
        ("Original title", movie.original_title.clone()),
        ("Tagline", movie.tagline.clone()),
        ("Released", values::format_date(movie.released)),
        ("Runtime", minutes(movie.runtime_minutes())),
        ("Certification", movie.certification.clone()),
        ("Ratings", ratings(&movie.ratings)),
        ("Genres", movie.genres.join(", ")),
        ("Countries", movie.countries.join(", ")),
        ("Studios", movie.studios.join(", ")),
        ("Director", movie.director.clone()),
        ("Writer", movie.writer.clone()),
        ("Set", movie.set.name.clone()),
        ("Ids", ids(&movie.ids)),
        ("Actors", count(movie.actors.len())),
        ("Play count", count(movie.play_count.max(0) as usize)),
        ("Watched", values::format_bool(movie.watched).to_string()),
    ]
}

fn show_rows(show: &TvShow) -> Vec<(&'static str, String)> {
    let seasons = show
        .named_seasons
        .iter()
        .map(|season| format!("{}: {}", season.number, season.name))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        ("Title", show.title.clone()),
        ("Show title", show.show_title.clone()),
        ("First aired", values::format_date(show.first_aired)),
        ("Status", show.status.clone()),
        ("Episodes", count(show.episode_count.max(0) as usize)),
        ("Runtime", minutes(show.runtime_minutes())),
        ("Certification", show.certification.clone()),
        ("Ratings", ratings(&show.ratings)),
        ("Genres", show.genres.join(", ")),
        ("Networks", show.studios.join(", ")),
        ("Ids", ids(&show.ids)),
        ("Named seasons", seasons),
        ("Actors", count(show.actors.len())),
    ]
}

fn ratings(ratings: &[Rating]) -> String {
    ratings
        .iter()
        .map(|r| format!("{} {} ({} votes)", r.source, values::format_float(r.rating), r.vote_count))
        .collect::<Vec<_>>()
        .join("\n")
}

fn ids(ids: &MediaIds) -> String {
    let mut parts: Vec<String> = ids
        .unique_ids()
        .into_iter()
        .map(|(kind, value)| format!("{}: {}", kind, value))
        .collect();
    if let Some(id) = &ids.id {
        parts.push(format!("id: {}", id));
    }
    parts.join(", ")
}

fn minutes(value: u64) -> String {
    if value == 0 {
        String::new()
    } else {
        format!("{} min", value)
    }
}

fn count(value: usize) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}
