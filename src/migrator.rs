use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_stores_table::Migration),
            Box::new(m20240301_000002_create_products_table::Migration),
            Box::new(m20240301_000003_create_orders_table::Migration),
            Box::new(m20240301_000004_create_order_items_table::Migration),
            Box::new(m20240301_000005_create_distributors_table::Migration),
            Box::new(m20240301_000006_create_scheduling_drafts_table::Migration),
            Box::new(m20240301_000007_create_delivery_trips_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240301_000001_create_stores_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_stores_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Stores::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Stores::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Stores::Name).string().not_null())
                        .col(ColumnDef::new(Stores::Address).string().not_null())
                        .col(ColumnDef::new(Stores::City).string())
                        .col(ColumnDef::new(Stores::DeliveryZone).string())
                        .col(ColumnDef::new(Stores::Latitude).double())
                        .col(ColumnDef::new(Stores::Longitude).double())
                        .col(ColumnDef::new(Stores::PreferredDeliveryTime).string())
                        .col(ColumnDef::new(Stores::AssignedDistributorId).uuid())
                        .col(
                            ColumnDef::new(Stores::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Stores::UpdatedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Stores::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Stores {
        Table,
        Id,
        Name,
        Address,
        City,
        DeliveryZone,
        Latitude,
        Longitude,
        PreferredDeliveryTime,
        AssignedDistributorId,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000002_create_products_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_products_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Products::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::Sku)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Products::Name).string().not_null())
                        .col(
                            ColumnDef::new(Products::UnitPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::UnitWeightKg)
                                .decimal_len(10, 3)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::RequiresSpecialHandling)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Products::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Products::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Products::UpdatedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Products {
        Table,
        Id,
        Sku,
        Name,
        UnitPrice,
        UnitWeightKg,
        RequiresSpecialHandling,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000003_create_orders_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000003_create_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Orders::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Orders::Id).uuid().primary_key().not_null())
                        .col(
                            ColumnDef::new(Orders::OrderNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Orders::StoreId).uuid().not_null())
                        .col(ColumnDef::new(Orders::Status).text().not_null())
                        .col(ColumnDef::new(Orders::Priority).text().not_null())
                        .col(
                            ColumnDef::new(Orders::TotalAmount)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Orders::OrderDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Orders::DeliveryDate).date())
                        .col(ColumnDef::new(Orders::AssignedDistributorId).uuid())
                        .col(ColumnDef::new(Orders::Notes).string())
                        .col(
                            ColumnDef::new(Orders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Orders::UpdatedAt).timestamp_with_time_zone())
                        .col(
                            ColumnDef::new(Orders::Version)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_orders_status")
                        .table(Orders::Table)
                        .col(Orders::Status)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Orders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Orders {
        Table,
        Id,
        OrderNumber,
        StoreId,
        Status,
        Priority,
        TotalAmount,
        OrderDate,
        DeliveryDate,
        AssignedDistributorId,
        Notes,
        CreatedAt,
        UpdatedAt,
        Version,
    }
}

mod m20240301_000004_create_order_items_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000004_create_order_items_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(OrderItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(OrderItems::OrderId).uuid().not_null())
                        .col(ColumnDef::new(OrderItems::ProductId).uuid().not_null())
                        .col(ColumnDef::new(OrderItems::ProductName).string().not_null())
                        .col(ColumnDef::new(OrderItems::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(OrderItems::UnitPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderItems::TotalPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderItems::UnitWeightKg)
                                .decimal_len(10, 3)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderItems::RequiresSpecialHandling)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_order_items_order_id")
                        .table(OrderItems::Table)
                        .col(OrderItems::OrderId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(OrderItems::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum OrderItems {
        Table,
        Id,
        OrderId,
        ProductId,
        ProductName,
        Quantity,
        UnitPrice,
        TotalPrice,
        UnitWeightKg,
        RequiresSpecialHandling,
    }
}

mod m20240301_000005_create_distributors_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000005_create_distributors_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Distributors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Distributors::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Distributors::Name).string().not_null())
                        .col(
                            ColumnDef::new(Distributors::Email)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Distributors::Status).text().not_null())
                        .col(ColumnDef::new(Distributors::Availability).text().not_null())
                        .col(ColumnDef::new(Distributors::DeliveryZone).string())
                        .col(
                            ColumnDef::new(Distributors::MaxDailyCapacity)
                                .integer()
                                .not_null()
                                .default(5),
                        )
                        .col(
                            ColumnDef::new(Distributors::VehicleCapacity)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Distributors::PerformanceRating)
                                .double()
                                .not_null()
                                .default(75.0),
                        )
                        .col(
                            ColumnDef::new(Distributors::TotalDeliveries)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Distributors::SuccessfulDeliveries)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Distributors::CurrentWorkload)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Distributors::Latitude).double())
                        .col(ColumnDef::new(Distributors::Longitude).double())
                        .col(
                            ColumnDef::new(Distributors::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Distributors::UpdatedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_distributors_status_zone")
                        .table(Distributors::Table)
                        .col(Distributors::Status)
                        .col(Distributors::DeliveryZone)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Distributors::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Distributors {
        Table,
        Id,
        Name,
        Email,
        Status,
        Availability,
        DeliveryZone,
        MaxDailyCapacity,
        VehicleCapacity,
        PerformanceRating,
        TotalDeliveries,
        SuccessfulDeliveries,
        CurrentWorkload,
        Latitude,
        Longitude,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000006_create_scheduling_drafts_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000006_create_scheduling_drafts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SchedulingDrafts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SchedulingDrafts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SchedulingDrafts::OrderId).uuid().not_null())
                        .col(
                            ColumnDef::new(SchedulingDrafts::SuggestedDistributorId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::SuggestedDistributorName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::ConfidenceScore)
                                .double()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::SuggestedDeliveryDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::SuggestedPriority)
                                .text()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SchedulingDrafts::Reasoning).json().not_null())
                        .col(
                            ColumnDef::new(SchedulingDrafts::AlternativeSuggestions)
                                .json()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::RouteEstimate)
                                .json()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::EstimatedDeliveryTime)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::EstimatedDurationMinutes)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SchedulingDrafts::Status).text().not_null())
                        .col(ColumnDef::new(SchedulingDrafts::AdminNotes).string())
                        .col(ColumnDef::new(SchedulingDrafts::Modifications).json())
                        .col(ColumnDef::new(SchedulingDrafts::ApprovedDistributorId).uuid())
                        .col(ColumnDef::new(SchedulingDrafts::ApprovedDeliveryDate).date())
                        .col(ColumnDef::new(SchedulingDrafts::ApprovedPriority).text())
                        .col(ColumnDef::new(SchedulingDrafts::ReviewedBy).string())
                        .col(
                            ColumnDef::new(SchedulingDrafts::ReviewedAt)
                                .timestamp_with_time_zone(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::CreatedBy)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SchedulingDrafts::UpdatedAt)
                                .timestamp_with_time_zone(),
                        )
                        .to_owned(),
                )
                .await?;

            // One pending draft per order is enforced in the service layer;
            // the index keeps the lookup cheap.
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_scheduling_drafts_order_id")
                        .table(SchedulingDrafts::Table)
                        .col(SchedulingDrafts::OrderId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_scheduling_drafts_status")
                        .table(SchedulingDrafts::Table)
                        .col(SchedulingDrafts::Status)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SchedulingDrafts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SchedulingDrafts {
        Table,
        Id,
        OrderId,
        SuggestedDistributorId,
        SuggestedDistributorName,
        ConfidenceScore,
        SuggestedDeliveryDate,
        SuggestedPriority,
        Reasoning,
        AlternativeSuggestions,
        RouteEstimate,
        EstimatedDeliveryTime,
        EstimatedDurationMinutes,
        Status,
        AdminNotes,
        Modifications,
        ApprovedDistributorId,
        ApprovedDeliveryDate,
        ApprovedPriority,
        ReviewedBy,
        ReviewedAt,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000007_create_delivery_trips_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000007_create_delivery_trips_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DeliveryTrips::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DeliveryTrips::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryTrips::TripNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(DeliveryTrips::DistributorId)
                                .uuid()
                                .not_null(),
                        )
                        .col(ColumnDef::new(DeliveryTrips::OrderId).uuid().not_null())
                        .col(ColumnDef::new(DeliveryTrips::Status).text().not_null())
                        .col(
                            ColumnDef::new(DeliveryTrips::ScheduledDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryTrips::PlannedStartTime)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryTrips::TotalAmount)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryTrips::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryTrips::UpdatedAt)
                                .timestamp_with_time_zone(),
                        )
                        .to_owned(),
                )
                .await?;

            // Per-day capacity checks scan by distributor and date.
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_delivery_trips_distributor_date")
                        .table(DeliveryTrips::Table)
                        .col(DeliveryTrips::DistributorId)
                        .col(DeliveryTrips::ScheduledDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DeliveryTrips::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum DeliveryTrips {
        Table,
        Id,
        TripNumber,
        DistributorId,
        OrderId,
        Status,
        ScheduledDate,
        PlannedStartTime,
        TotalAmount,
        CreatedAt,
        UpdatedAt,
    }
}
