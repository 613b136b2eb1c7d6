pub mod m202401150001_create_badges;
