//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub author: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for posts_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            author: model.author,
            title: model.title,
            content: model.content,
            date: model.date.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<posts_core::domain::Post> for ActiveModel {
    fn from(post: posts_core::domain::Post) -> Self {
        Self {
            id: Set(post.id.into_inner()),
            author: Set(post.author),
            title: Set(post.title),
            content: Set(post.content),
            date: Set(post.date.into()),
        }
    }
}
