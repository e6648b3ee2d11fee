use actix_web::web;

pub mod routes {
    pub mod dispatcher;
    pub mod driver;
    pub mod order;
    pub mod order_status;
}

mod dtos {
    pub(crate) mod dispatcher;
    pub(crate) mod driver;
    pub(crate) mod order;
    pub(crate) mod order_status;
}

pub fn mount_orders() -> actix_web::Scope {
    web::scope("/orders")
        .service(routes::order::get_orders)
        .service(routes::order::post_order)
        .service(routes::order::put_order)
        .service(routes::order::delete_order)
}

pub fn mount_drivers() -> actix_web::Scope {
    web::scope("/drivers")
        .service(routes::driver::get_drivers)
        .service(routes::driver::post_driver)
        .service(routes::driver::put_driver)
        .service(routes::driver::delete_driver)
}

pub fn mount_dispatchers() -> actix_web::Scope {
    web::scope("/dispatchers")
        .service(routes::dispatcher::get_dispatchers)
        .service(routes::dispatcher::post_dispatcher)
        .service(routes::dispatcher::put_dispatcher)
        .service(routes::dispatcher::delete_dispatcher)
}

pub fn mount_order_statuses() -> actix_web::Scope {
    web::scope("/order_statuses")
        .service(routes::order_status::get_order_statuses)
        .service(routes::order_status::post_order_status)
        .service(routes::order_status::put_order_status)
        .service(routes::order_status::delete_order_status)
}
