/// Embedded sample catalog
///
/// Used whenever the remote movie list cannot be fetched, so the UI always
/// has something to render without any network access.
use super::data::Movie;

const POSTER_DARK: &str =
    "https://images.unsplash.com/photo-1489599735188-b3f7baa8a2b1?w=400&h=600&fit=crop";
const POSTER_LIGHTS: &str =
    "https://images.unsplash.com/photo-1574267432553-4b4628b3a60b?w=400&h=600&fit=crop";
const POSTER_SPACE: &str =
    "https://images.unsplash.com/photo-1446776877081-d282a0f896e2?w=400&h=600&fit=crop";
const POSTER_SCREEN: &str =
    "https://images.unsplash.com/photo-1478720568477-b0e6cc2d9a3d?w=400&h=600&fit=crop";
const POSTER_REEL: &str =
    "https://images.unsplash.com/photo-1536440136628-849c177e76a1?w=400&h=600&fit=crop";
const POSTER_SEATS: &str =
    "https://images.unsplash.com/photo-1485095329183-d0797cdc5676?w=400&h=600&fit=crop";
const POSTER_FILM: &str =
    "https://images.unsplash.com/photo-1518929458119-e5bf444c30f4?w=400&h=600&fit=crop";
const POSTER_CITY: &str =
    "https://images.unsplash.com/photo-1500522144261-ea64433bbe27?w=400&h=600&fit=crop";

/// (id, title, rating, poster, imdb title id)
const SAMPLES: [(i64, &str, f64, &str, &str); 20] = [
    (1, "The Dark Knight", 9.0, POSTER_DARK, "tt0468569"),
    (2, "Inception", 8.8, POSTER_LIGHTS, "tt1375666"),
    (3, "Interstellar", 8.6, POSTER_SPACE, "tt0816692"),
    (4, "The Matrix", 8.7, POSTER_SCREEN, "tt0133093"),
    (5, "Pulp Fiction", 8.9, POSTER_REEL, "tt0110912"),
    (6, "The Shawshank Redemption", 9.3, POSTER_DARK, "tt0111161"),
    (7, "Forrest Gump", 8.8, POSTER_SEATS, "tt0109830"),
    (8, "The Godfather", 9.2, POSTER_FILM, "tt0068646"),
    (9, "Goodfellas", 8.7, POSTER_CITY, "tt0099685"),
    (10, "Casablanca", 8.5, POSTER_DARK, "tt0034583"),
    (11, "Schindler's List", 9.0, POSTER_FILM, "tt0108052"),
    (12, "Avatar", 7.9, POSTER_SPACE, "tt0499549"),
    (13, "Titanic", 7.9, POSTER_SEATS, "tt0120338"),
    (14, "The Avengers", 8.0, POSTER_SCREEN, "tt0848228"),
    (15, "Jurassic Park", 8.2, POSTER_SPACE, "tt0107290"),
    (16, "Star Wars: Episode IV", 8.6, POSTER_SCREEN, "tt0076759"),
    (17, "The Lion King", 8.5, POSTER_SEATS, "tt0110357"),
    (18, "Fight Club", 8.8, POSTER_CITY, "tt0137523"),
    (19, "The Lord of the Rings", 9.0, POSTER_DARK, "tt0120737"),
    (20, "Gladiator", 8.5, POSTER_FILM, "tt0172495"),
];

/// Build the fallback catalog (always non-empty, fixed order)
pub fn fallback_catalog() -> Vec<Movie> {
    SAMPLES
        .iter()
        .map(|&(id, title, rating, poster, imdb)| Movie {
            id,
            title: title.to_string(),
            rating,
            poster_url: poster.to_string(),
            detail_url: format!("https://www.imdb.com/title/{}/", imdb),
        })
        .collect()
}
