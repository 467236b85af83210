use crate::{
    errors::{Error, Result},
    spotify::{MARKET_COUNTRY, SpotifyClient},
    types::TrackMarketsResponse,
};

impl SpotifyClient {
    /// Returns the alpha-2 codes of every market the track is available in.
    pub async fn get_markets(&self, track_id: &str, token: &str) -> Result<Vec<String>> {
        let request = self
            .http
            .get(self.api_url(&format!("tracks/{id}", id = track_id)))
            .query(&[("country", MARKET_COUNTRY)]);

        let res: TrackMarketsResponse = self.get_json(request, token).await?;
        res.available_markets.ok_or_else(|| {
            Error::MalformedResponse(format!("track {} has no available_markets", track_id))
        })
    }
}
