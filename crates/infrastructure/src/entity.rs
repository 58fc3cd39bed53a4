//! `todos` テーブルの SeaORM エンティティ

pub mod todo {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "todos")]
    pub struct Model {
        // AUTOINCREMENT は INTEGER PRIMARY KEY にしか付けられないため型を明示
        #[sea_orm(primary_key, column_type = "Integer")]
        pub id: i64,
        pub title: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub description: Option<String>,
        pub completed: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for domain::Todo {
        fn from(model: Model) -> Self {
            domain::Todo {
                id: domain::TodoId::new(model.id),
                title: model.title,
                description: model.description,
                completed: model.completed,
            }
        }
    }
}
