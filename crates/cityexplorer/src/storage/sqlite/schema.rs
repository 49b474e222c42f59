//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
///
/// Domain rows get an autoincrement id so reads can return them in insertion
/// order, which is the order the provider returned them in.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Locations table, keyed by the raw search query
CREATE TABLE IF NOT EXISTS locations (
    id TEXT PRIMARY KEY,
    search_query TEXT NOT NULL UNIQUE,
    formatted_query TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL
);

-- Daily forecasts
CREATE TABLE IF NOT EXISTS weather (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    location_id TEXT NOT NULL,
    forecast TEXT NOT NULL,
    time TEXT NOT NULL,
    FOREIGN KEY (location_id) REFERENCES locations(id) ON DELETE CASCADE
);

-- Nearby businesses
CREATE TABLE IF NOT EXISTS yelp (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    location_id TEXT NOT NULL,
    name TEXT NOT NULL,
    image_url TEXT,
    price TEXT,
    rating REAL,
    url TEXT,
    FOREIGN KEY (location_id) REFERENCES locations(id) ON DELETE CASCADE
);

-- Movies matching the search query
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    location_id TEXT NOT NULL,
    title TEXT NOT NULL,
    overview TEXT,
    average_votes REAL,
    total_votes INTEGER,
    image_url TEXT,
    popularity REAL,
    released_on TEXT,
    FOREIGN KEY (location_id) REFERENCES locations(id) ON DELETE CASCADE
);

-- Upcoming events
CREATE TABLE IF NOT EXISTS meetup (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    location_id TEXT NOT NULL,
    link TEXT,
    name TEXT NOT NULL,
    creation_date TEXT,
    host TEXT,
    FOREIGN KEY (location_id) REFERENCES locations(id) ON DELETE CASCADE
);

-- Indexes for cache lookups
CREATE INDEX IF NOT EXISTS idx_weather_location_id ON weather(location_id);
CREATE INDEX IF NOT EXISTS idx_yelp_location_id ON yelp(location_id);
CREATE INDEX IF NOT EXISTS idx_movies_location_id ON movies(location_id);
CREATE INDEX IF NOT EXISTS idx_meetup_location_id ON meetup(location_id);
"#;

/// Deletes every cached row. Children first, then their locations.
pub const CLEAR_TABLES: &str = r#"
DELETE FROM weather;
DELETE FROM yelp;
DELETE FROM movies;
DELETE FROM meetup;
DELETE FROM locations;
"#;

// Location queries
pub const INSERT_LOCATION: &str = r#"
INSERT INTO locations (id, search_query, formatted_query, latitude, longitude)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_LOCATION_BY_QUERY: &str = r#"
SELECT id, search_query, formatted_query, latitude, longitude
FROM locations
WHERE search_query = ?1
"#;

// Weather queries
pub const INSERT_WEATHER: &str = r#"
INSERT INTO weather (location_id, forecast, time)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_WEATHER_BY_LOCATION: &str = r#"
SELECT location_id, forecast, time
FROM weather
WHERE location_id = ?1
ORDER BY id ASC
"#;

// Business queries
pub const INSERT_BUSINESS: &str = r#"
INSERT INTO yelp (location_id, name, image_url, price, rating, url)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_BUSINESSES_BY_LOCATION: &str = r#"
SELECT location_id, name, image_url, price, rating, url
FROM yelp
WHERE location_id = ?1
ORDER BY id ASC
"#;

// Movie queries
pub const INSERT_MOVIE: &str = r#"
INSERT INTO movies (location_id, title, overview, average_votes, total_votes, image_url, popularity, released_on)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_MOVIES_BY_LOCATION: &str = r#"
SELECT location_id, title, overview, average_votes, total_votes, image_url, popularity, released_on
FROM movies
WHERE location_id = ?1
ORDER BY id ASC
"#;

// Event queries
pub const INSERT_EVENT: &str = r#"
INSERT INTO meetup (location_id, link, name, creation_date, host)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_EVENTS_BY_LOCATION: &str = r#"
SELECT location_id, link, name, creation_date, host
FROM meetup
WHERE location_id = ?1
ORDER BY id ASC
"#;
