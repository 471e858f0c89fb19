// 业务错误码，随 ApiResponse 的 code 字段返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    InvalidArgument = 1002,

    // 资源错误
    NotFound = 2004,
    ReferenceNotFound = 2005,
    ConstraintViolation = 2009,

    InternalServerError = 5000,
}
