use entity::item::{Column, Entity as Item};
use sea_orm::sea_query::{ColumnDef, Index, Table};
use sea_orm::{ConnectionTrait, DbErr};

const NAME_INDEX: &str = "idx-items-name";

/// Creates the `items` table and its name index unless they already exist.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let table = Table::create()
        .table(Item)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key()
        )
        .col(
            ColumnDef::new(Column::Name)
                .string_len(255)
                .not_null()
        )
        .col(ColumnDef::new(Column::Description).text().null())
        .col(ColumnDef::new(Column::Price).double().null())
        .col(
            ColumnDef::new(Column::IsActive)
                .boolean()
                .not_null()
                .default(true)
        )
        .col(
            ColumnDef::new(Column::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
        )
        .col(
            ColumnDef::new(Column::UpdatedAt)
                .timestamp_with_time_zone()
                .null()
        )
        .to_owned();
    db.execute(backend.build(&table)).await?;

    let index = Index::create()
        .if_not_exists()
        .name(NAME_INDEX)
        .table(Item)
        .col(Column::Name)
        .to_owned();
    db.execute(backend.build(&index)).await?;

    Ok(())
}

pub async fn drop_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let table = Table::drop()
        .table(Item)
        .if_exists()
        .to_owned();
    db.execute(backend.build(&table)).await?;
    Ok(())
}
