use crate::{
    errors::Result,
    spotify::{MARKET_COUNTRY, SpotifyClient},
    types::{SearchResponse, Track, TopTracksResponse},
};

impl SpotifyClient {
    /// Searches for artists matching `artist_name` and returns the raw result page.
    ///
    /// Only the top hit is requested (`limit=1`). The name is sent as a regular
    /// query parameter, so spaces and reserved characters are percent-encoded.
    /// Use [`SearchResponse::into_first_artist`] to pick the artist.
    pub async fn search_artist(&self, token: &str, artist_name: &str) -> Result<SearchResponse> {
        let request = self.http.get(self.api_url("search")).query(&[
            ("q", artist_name),
            ("type", "artist"),
            ("limit", "1"),
        ]);

        self.get_json(request, token).await
    }

    /// Retrieves the most popular tracks of an artist.
    ///
    /// Tracks come back in the order the API ranks them; no re-ranking happens
    /// here. The country is always [`MARKET_COUNTRY`].
    pub async fn top_tracks(&self, artist_id: &str, token: &str) -> Result<Vec<Track>> {
        let request = self
            .http
            .get(self.api_url(&format!("artists/{id}/top-tracks", id = artist_id)))
            .query(&[("country", MARKET_COUNTRY)]);

        let res: TopTracksResponse = self.get_json(request, token).await?;
        Ok(res.tracks)
    }
}
