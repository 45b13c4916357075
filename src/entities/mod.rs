//! Movie and director entities

#[macro_use]
pub mod macros;

impl_document_entity!(
    /// A movie, optionally referencing the director who made it
    ///
    /// `director_id` is a plain reference: nothing checks that the director
    /// exists, and deleting a director leaves referencing movies untouched.
    Movie,
    MoviePatch,
    "movies",
    {
        /// Title of the movie
        name: String,
        /// Free-form genre label
        genre: String,
        /// Identifier of the referenced director
        director_id: String,
    }
);

impl_document_entity!(
    /// A movie director
    Director,
    DirectorPatch,
    "directors",
    {
        /// Full name
        name: String,
        /// Age in years
        age: i32,
    }
);
