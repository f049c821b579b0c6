pub mod u601_afp_query;
