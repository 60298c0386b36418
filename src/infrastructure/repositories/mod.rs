//! Repository implementations using SeaORM

pub mod artist_repository;
pub mod show_repository;
pub mod venue_repository;

pub use artist_repository::SeaOrmArtistRepository;
pub use show_repository::SeaOrmShowRepository;
pub use venue_repository::SeaOrmVenueRepository;

use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};

/// `!` escapes LIKE wildcards so the search term matches literally
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        match c {
            '!' | '%' | '_' => {
                out.push('!');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// `lower(column) LIKE '%term%' ESCAPE '!'` for the trimmed term.
///
/// SQLite's `lower` only folds ASCII, so the term is folded the same way.
pub(crate) fn name_contains<C: IntoColumnRef>(column: C, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&term.trim().to_ascii_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('!'))
}
