use serde::de::DeserializeOwned;

use matcalc_core::Engine;

use crate::service::request::{MatrixRequest, Operation, SystemRequest, TwoMatricesRequest};
use crate::service::response::Response;

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, Response> {
    serde_json::from_str(body).map_err(|e| Response::failure(format!("Invalid request: {}", e)))
}

/// Run one operation on a JSON request body.
///
/// Every failure, malformed body included, comes back as an error payload.
pub fn handle(op: Operation, body: &str, engine: &Engine) -> Response {
    log::debug!("[matcalc::service] handling '{}' ({} bytes)", op, body.len());
    let response = match dispatch(op, body, engine) {
        Ok(response) | Err(response) => response,
    };
    if let Response::Failure { error } = &response {
        log::info!("[matcalc::service] '{}' failed: {}", op, error);
    }
    response
}

fn dispatch(op: Operation, body: &str, engine: &Engine) -> Result<Response, Response> {
    let response = match op {
        Operation::Add => {
            let req: TwoMatricesRequest = parse(body)?;
            Response::from_result(engine.add(&req.matrix_a, &req.matrix_b))
        }
        Operation::Multiply => {
            let req: TwoMatricesRequest = parse(body)?;
            Response::from_result(engine.multiply(&req.matrix_a, &req.matrix_b))
        }
        Operation::Determinant => {
            let req: MatrixRequest = parse(body)?;
            Response::from_result(engine.determinant(&req.matrix))
        }
        Operation::Inverse => {
            let req: MatrixRequest = parse(body)?;
            Response::from_result(engine.inverse(&req.matrix))
        }
        Operation::Solve => {
            let req: SystemRequest = parse(body)?;
            Response::from_result(engine.solve(&req.coefficients, &req.constants))
        }
        Operation::Transpose => {
            let req: MatrixRequest = parse(body)?;
            Response::from_result(engine.transpose(&req.matrix))
        }
        Operation::Rank => {
            let req: MatrixRequest = parse(body)?;
            Response::from_result(engine.rank(&req.matrix))
        }
    };
    Ok(response)
}
