use crate::{
    client::Sanity,
    error::ClientError,
    models::{Expertise, Industry, Tag},
    queries,
};

impl Sanity {
    /// All industries, ordered by name.
    pub async fn industries(&self) -> Result<Vec<Industry>, ClientError> {
        let industries: Option<Vec<Industry>> = self.run_query(queries::INDUSTRIES, &[]).await?;
        Ok(industries.unwrap_or_default())
    }

    /// All expertises, ordered by name, each with its parent industry
    /// resolved when one is set.
    pub async fn expertises(&self) -> Result<Vec<Expertise>, ClientError> {
        let expertises: Option<Vec<Expertise>> = self.run_query(queries::EXPERTISES, &[]).await?;
        Ok(expertises.unwrap_or_default())
    }

    /// All tags, ordered by name.
    pub async fn tags(&self) -> Result<Vec<Tag>, ClientError> {
        let tags: Option<Vec<Tag>> = self.run_query(queries::TAGS, &[]).await?;
        Ok(tags.unwrap_or_default())
    }
}
