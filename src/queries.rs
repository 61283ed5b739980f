//! GROQ projections for the read-only query surface. Each constant selects
//! and dereferences exactly the fields its callers consume; references are
//! resolved one level deep (`->`), so a dangling link projects as `null`.

/// All published news, newest first. List shape: no body, no SEO object.
pub const NEWS_LIST: &str = r#"*[_type == "news" && status == "published"] | order(publishedDate desc) {
  _id,
  title,
  excerpt,
  slug,
  publishedDate,
  readingTime,
  author,
  status,
  featured,
  featuredImage {
    asset-> {
      _id,
      url
    },
    alt,
    caption
  },
  industries[]-> {
    _id,
    name,
    slug,
    color
  },
  expertises[]-> {
    _id,
    name,
    slug,
    color,
    industry-> {
      _id,
      name,
      slug
    }
  },
  tags[]-> {
    _id,
    name,
    slug
  }
}"#;

/// A single news document matched on `$slug`, with the full block-content
/// body and the SEO override object.
pub const NEWS_BY_SLUG: &str = r#"*[_type == "news" && slug.current == $slug][0] {
  _id,
  title,
  excerpt,
  slug,
  publishedDate,
  readingTime,
  author,
  status,
  featured,
  featuredImage {
    asset-> {
      _id,
      url
    },
    alt,
    caption
  },
  content,
  industries[]-> {
    _id,
    name,
    slug,
    color
  },
  expertises[]-> {
    _id,
    name,
    slug,
    color,
    industry-> {
      _id,
      name,
      slug
    }
  },
  tags[]-> {
    _id,
    name,
    slug
  },
  meta {
    title,
    description,
    keywords,
    ogImage {
      asset-> {
        _id,
        url
      }
    }
  }
}"#;

/// All industries, alphabetical.
pub const INDUSTRIES: &str = r#"*[_type == "industry"] | order(name asc) {
  _id,
  name,
  slug,
  description,
  color
}"#;

/// All expertises, alphabetical, with the parent industry resolved.
pub const EXPERTISES: &str = r#"*[_type == "expertise"] | order(name asc) {
  _id,
  name,
  slug,
  description,
  color,
  industry-> {
    _id,
    name,
    slug
  }
}"#;

/// All tags, alphabetical.
pub const TAGS: &str = r#"*[_type == "tag"] | order(name asc) {
  _id,
  name,
  slug,
  description
}"#;
