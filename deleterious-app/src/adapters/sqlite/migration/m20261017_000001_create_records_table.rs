use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Record::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Record::Kind).string().not_null())
                    .col(ColumnDef::new(Record::Id).string().not_null())
                    .col(ColumnDef::new(Record::Label).string().null())
                    .col(ColumnDef::new(Record::CreatedAt).string().not_null())
                    .primary_key(Index::create().col(Record::Kind).col(Record::Id))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Record::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Record {
    #[sea_orm(iden = "records")]
    Table,
    Kind,
    Id,
    Label,
    CreatedAt,
}
